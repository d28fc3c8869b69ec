pub mod order_writer;
pub mod product_reader;
