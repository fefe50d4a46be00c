pub mod rent;
