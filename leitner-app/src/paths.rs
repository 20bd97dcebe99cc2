use directories::ProjectDirs;
use std::path::PathBuf;

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "leitner", "Leitner") {
        pd.data_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Deck picked up when no `--deck` is given, if the file exists.
pub fn default_deck_file() -> PathBuf {
    data_root().join("deck.json")
}
