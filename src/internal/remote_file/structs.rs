pub mod remote_entry;
