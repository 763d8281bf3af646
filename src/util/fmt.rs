use std::fmt::{self, Debug, Formatter};

use crate::node::DetailRef;

/// Writes a chain of details as `(id: data) -> (id: data)`, or `()` when there are none.
pub fn write_chain<'a, D: Debug + 'a>(
    f: &mut Formatter<'_>,
    details: impl IntoIterator<Item = DetailRef<'a, D>>,
) -> fmt::Result {
    let mut details = details.into_iter().peekable();
    if details.peek().is_none() {
        return write!(f, "()");
    }
    while let Some(DetailRef { id, data }) = details.next() {
        write!(f, "({id}: {data:?})")?;
        if details.peek().is_some() {
            write!(f, " -> ")?;
        }
    }
    Ok(())
}
