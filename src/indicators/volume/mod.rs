pub mod chaikin;
