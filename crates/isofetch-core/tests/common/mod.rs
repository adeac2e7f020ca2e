pub mod sprite_server;
