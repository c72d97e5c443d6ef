mod city;

pub use city::{generate_city, CityConfig};
