pub mod setup_intent;
