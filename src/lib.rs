mod hash;
mod insert;
mod iter;
mod list;

pub use hash::fold_u64;
pub use insert::{insert_in_order, insert_in_order_by};
pub use iter::Iter;
pub use list::SortedList;
