/// Entity behaviour against a real (in-memory) database
pub mod entity_tests;
