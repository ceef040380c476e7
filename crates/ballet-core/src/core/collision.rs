use crate::components::entity::PhysicalObject;

/// Axis-aligned bounding box overlap between two physical objects.
///
/// Boxes span `[x, x + width) × [y, y + height)` from each object's top-left
/// position. Bounds are exclusive: boxes that only share an edge or a corner
/// do not collide. Symmetric in its arguments.
pub fn are_colliding<A, B>(a: &A, b: &B) -> bool
where
    A: PhysicalObject + ?Sized,
    B: PhysicalObject + ?Sized,
{
    let (pa, da) = (a.position(), a.dimension());
    let (pb, db) = (b.position(), b.dimension());
    pa.x < pb.x + db.width
        && pb.x < pa.x + da.width
        && pa.y < pb.y + db.height
        && pb.y < pa.y + da.height
}
