pub mod verify_error;
