/// Hands out ids for structures whose callers only supply data. Ids are never reused by the
/// same instance, including across resets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct IdSequence(u64);

impl IdSequence {
    pub const fn new() -> IdSequence {
        IdSequence(0)
    }

    pub fn next_id(&mut self) -> String {
        let id = self.0.to_string();
        self.0 += 1;
        id
    }
}
