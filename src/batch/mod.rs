pub mod batch_delete;
pub mod batch_executor;
pub mod batch_read;
pub mod batch_record;
pub mod batch_udf;
pub mod batch_write;

pub use self::{
    batch_delete::BatchDelete, batch_executor::BatchExecutor, batch_read::BatchRead,
    batch_record::BatchRecord, batch_udf::BatchUdf, batch_write::BatchWrite,
};
