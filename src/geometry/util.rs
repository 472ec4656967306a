use crate::error::{WktError, WktResult};
use crate::geometry::{CoordinateType, Dimension};

/// Resolve the coordinate type of a container of `dim` members.
///
/// Every member must have the coordinate type of `dim`. A container without members is
/// [`CoordinateType::Empty`], the same state as `<KIND> EMPTY`.
pub(crate) fn container_coord_type(
    dim: Dimension,
    members: impl IntoIterator<Item = CoordinateType>,
) -> WktResult<CoordinateType> {
    let expected = CoordinateType::from(dim);
    let mut any = false;
    for found in members {
        if found != expected {
            return Err(WktError::MixedDimension { expected, found });
        }
        any = true;
    }
    Ok(if any { expected } else { CoordinateType::Empty })
}
