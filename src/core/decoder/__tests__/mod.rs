pub mod coefficient_decoder_test;
