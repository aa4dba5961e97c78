//! CI-oriented configuration surfaces shared by test suites.

pub mod property_test_profile;
