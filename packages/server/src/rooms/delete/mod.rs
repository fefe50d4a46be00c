pub mod by_id;
