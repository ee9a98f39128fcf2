use std::time::Duration;

use futures::TryStreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, consolidate::pager, spotify::SpotifyClient, types::PlaylistRef, utils, warning,
};

pub async fn list_playlists(search: Option<String>) -> crate::Res<()> {
    let client = SpotifyClient::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));

    let fetched: Result<Vec<PlaylistRef>, _> =
        pager::paginate(|cursor| client.user_playlists_page(cursor))
            .try_collect()
            .await;
    pb.finish_and_clear();

    let playlists = utils::owned_playlists(fetched?, &config::spotify_user(), search.as_deref());
    if playlists.is_empty() {
        warning!("No playlists found");
        return Ok(());
    }

    let table = Table::new(utils::playlist_table_rows(&playlists));
    println!("{}", table);
    Ok(())
}
