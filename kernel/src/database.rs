use crate::KernelError;

/// Handle on the process-wide store. One pool is opened at startup and every
/// handler borrows a connection from it; no per-request transactions exist.
#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Connection: Send;
    async fn acquire(&self) -> error_stack::Result<Self::Connection, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}
