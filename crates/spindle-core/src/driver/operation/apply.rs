use super::Operation;

use crate::Mutation;

/// Applies mutations as one atomic unit: either every mutation commits or
/// none does.
#[derive(Debug, Clone)]
pub struct Apply {
    pub mutations: Vec<Mutation>,
}

impl From<Apply> for Operation {
    fn from(value: Apply) -> Operation {
        Operation::Apply(value)
    }
}
