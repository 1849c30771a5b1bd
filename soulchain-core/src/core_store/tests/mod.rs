/*
    Integration tests for the core_store subsystem

    Test suite covering:
    - Persistence round-trips and rehydration
    - setUser identity-change semantics
    - Saved-post bookkeeping
    - End-to-end tier scenarios across store and resolver
*/

pub mod scenario_tests;
