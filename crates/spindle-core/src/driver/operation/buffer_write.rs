use super::Operation;

use crate::Mutation;

/// Buffers mutations into a read-write transaction and commits them together.
///
/// Used for writes that span whole tables, such as truncation.
#[derive(Debug, Clone)]
pub struct BufferWrite {
    pub mutations: Vec<Mutation>,
}

impl From<BufferWrite> for Operation {
    fn from(value: BufferWrite) -> Operation {
        Operation::BufferWrite(value)
    }
}
