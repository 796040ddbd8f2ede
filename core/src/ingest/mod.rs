pub mod csv;

pub use csv::parse_parking_csv;
