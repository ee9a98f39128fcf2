use crate::{error::PipelineError, types::Track, utils};

/// Orders tracks by `added_at`, oldest first.
///
/// The sort is stable: tracks added in the same second keep their input
/// order. Every timestamp is parsed before anything is reordered, and the
/// first one that is not `YYYY-MM-DDTHH:MM:SSZ` fails the stage with its
/// position in the input.
pub fn sort(tracks: Vec<Track>) -> Result<Vec<Track>, PipelineError> {
    let mut keyed = tracks
        .into_iter()
        .enumerate()
        .map(
            |(position, track)| match utils::parse_added_at(&track.added_at) {
                Some(added_at) => Ok((added_at, track)),
                None => Err(PipelineError::MalformedTimestamp {
                    position,
                    track: track.label(),
                    value: track.added_at,
                }),
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(added_at, _)| *added_at);

    Ok(keyed.into_iter().map(|(_, track)| track).collect())
}
