pub mod envelope;
pub mod impl_meta_list;
pub mod meta_list;
