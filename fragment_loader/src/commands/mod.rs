pub mod fragment_download_command;
