pub mod by_city;
