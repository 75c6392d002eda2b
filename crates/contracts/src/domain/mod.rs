pub mod a001_user;
pub mod a002_game;
pub mod a003_game_server;
pub mod a004_game_item;
pub mod a005_player_item;
pub mod a006_chat_message;
