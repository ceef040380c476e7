use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Flat form of a gameplay event, for hosts that stream events as raw floats.
/// `kind` identifies the event, `a`/`b` carry the two entity ids, `c` is reserved.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    /// View a slice of records as a flat float buffer (FLOATS per record).
    pub fn as_floats(records: &[EventRecord]) -> &[f32] {
        bytemuck::cast_slice(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_flatten_in_field_order() {
        let records = [
            EventRecord { kind: 1.0, a: 2.0, b: 3.0, c: 0.0 },
            EventRecord { kind: 4.0, a: 5.0, b: 6.0, c: 0.0 },
        ];
        let floats = EventRecord::as_floats(&records);
        assert_eq!(floats.len(), 2 * EventRecord::FLOATS);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0]);
    }
}
