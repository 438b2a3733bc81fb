pub mod push_pull;
