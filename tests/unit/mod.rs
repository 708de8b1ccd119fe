pub mod game_trait_tests;
