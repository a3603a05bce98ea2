pub mod response_decoder;
