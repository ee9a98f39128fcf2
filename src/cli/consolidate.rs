use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    config,
    consolidate::{Pipeline, PipelineOptions},
    error::PipelineError,
    info,
    spotify::SpotifyClient,
    success, warning,
};

/// Where the consolidated tracks go.
#[derive(Debug, Clone)]
pub enum Destination {
    Existing(String),
    New(String),
}

pub async fn consolidate(
    sources: Vec<String>,
    destination: Destination,
    options: PipelineOptions,
) -> crate::Res<()> {
    let client = SpotifyClient::from_env();

    let destination_id = match destination {
        Destination::Existing(id) => id,
        Destination::New(name) => {
            let created = client.create_playlist(&config::spotify_user(), &name).await?;
            success!("Created playlist {} ({})", created.name, created.id);
            created.id
        }
    };

    let cancel = Arc::new(AtomicBool::new(false));
    let signal_flag = Arc::clone(&cancel);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warning!("Interrupted, stopping before the next stage");
            signal_flag.store(true, Ordering::SeqCst);
        }
    });

    info!(
        "Consolidating {} playlist(s){} into {}",
        sources.len(),
        if options.include_saved_tracks {
            " and saved tracks"
        } else {
            ""
        },
        destination_id
    );

    let pipeline = Pipeline::new(&client, options).with_cancel(cancel);
    match pipeline.run(&sources, &destination_id).await {
        Ok(summary) => {
            success!(
                "Wrote {} tracks in {} chunk(s), {} duplicate(s) removed",
                summary.tracks_written,
                summary.chunks_written,
                summary.duplicates_removed
            );
            Ok(())
        }
        Err(e) => {
            if let PipelineError::Write { chunks_written, .. } = &e {
                if *chunks_written > 0 {
                    warning!(
                        "Playlist {} already holds the first {} chunk(s) of this run",
                        destination_id,
                        chunks_written
                    );
                }
            }
            Err(format!("{} stage failed: {}", e.stage(), e).into())
        }
    }
}
