use crate::PrimitiveIndex;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no primitive exists for {0:?}")]
    MissingPrimitive(PrimitiveIndex),
    #[error("primitive {0:?} is not a group")]
    NotAGroup(PrimitiveIndex),
    #[error("adding {child:?} to {group:?} would make the group contain itself")]
    Cycle {
        group: PrimitiveIndex,
        child: PrimitiveIndex,
    },
}
