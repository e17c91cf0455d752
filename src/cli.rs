//! Interactive menu loop
//!
//! Pure I/O plumbing around [`PlaylistEngine`]: reads numbered commands and
//! their arguments from any `BufRead`, formats results onto any `Write`.
//! Keeping both ends generic lets tests drive the loop from a string or a
//! script file and capture the output.

use crate::engine::PlaylistEngine;
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\n==== Playlist Engine ====\n\
    1. Add Track\n\
    2. Delete Track\n\
    3. Move Track\n\
    4. Reverse Playlist\n\
    5. View Playlist\n\
    6. Snapshot (Top 5 Longest)\n\
    7. Top-N Longest\n\
    8. Genre Report\n\
    9. Rate Track\n\
    10. View Rated Tracks\n\
    11. Lookup by Title\n\
    12. Undo Last Play\n\
    13. Play Track\n\
    14. Exit";

/// Run the menu loop until "Exit" or end of input
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Enter choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_track(input, out, engine)?,
            "2" => delete_track(input, out, engine)?,
            "3" => move_track(input, out, engine)?,
            "4" => {
                engine.reverse();
                writeln!(out, "Playlist reversed.")?;
            }
            "5" => view_playlist(out, engine)?,
            "6" => top_longest(out, engine, 5)?,
            "7" => {
                if let Some(n) = prompt_number(input, out, "Enter N: ")? {
                    top_longest(out, engine, n)?;
                }
            }
            "8" => genre_report(out, engine)?,
            "9" => rate_track(input, out, engine)?,
            "10" => view_rated(out, engine)?,
            "11" => lookup(input, out, engine)?,
            "12" => undo(out, engine)?,
            "13" => play(input, out, engine)?,
            "14" => break,
            other => writeln!(out, "Invalid choice: {other}")?,
        }
    }

    writeln!(out, "\nExiting playlist engine.")?;
    Ok(())
}

fn add_track<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    let Some(title) = prompt(input, out, "Title: ")? else {
        return Ok(());
    };
    let Some(artist) = prompt(input, out, "Artist: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, out, "Genre: ")? else {
        return Ok(());
    };
    let Some(duration) = prompt_number(input, out, "Duration (in seconds): ")? else {
        return Ok(());
    };

    match engine.add_track(&title, &artist, &genre, duration) {
        Ok(id) => writeln!(out, "Added \"{title}\" (ID: {id})")?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn delete_track<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    let Some(index) = prompt_number::<R, W, usize>(input, out, "Enter index to delete: ")? else {
        return Ok(());
    };

    match engine.delete_at(index) {
        Some(track) => writeln!(out, "Deleted \"{}\"", track.title)?,
        None => writeln!(out, "No track at index {index}.")?,
    }
    Ok(())
}

fn move_track<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    let Some(from) = prompt_number::<R, W, usize>(input, out, "From index: ")? else {
        return Ok(());
    };
    let Some(to) = prompt_number::<R, W, usize>(input, out, "To index: ")? else {
        return Ok(());
    };

    if engine.move_track(from, to) {
        writeln!(out, "Moved track from {from} to {to}.")?;
    } else {
        writeln!(out, "No track at index {from}.")?;
    }
    Ok(())
}

fn view_playlist<W: Write>(out: &mut W, engine: &PlaylistEngine) -> Result<()> {
    let tracks = engine.snapshot();
    if tracks.is_empty() {
        writeln!(out, "Playlist is empty.")?;
        return Ok(());
    }
    for track in tracks {
        writeln!(out, "{track}")?;
    }
    Ok(())
}

fn top_longest<W: Write>(out: &mut W, engine: &PlaylistEngine, n: usize) -> Result<()> {
    writeln!(out, "Top {n} Longest Tracks:")?;
    for track in engine.top_longest(n) {
        writeln!(out, "{} by {} ({}s)", track.title, track.artist, track.duration_secs)?;
    }
    Ok(())
}

fn genre_report<W: Write>(out: &mut W, engine: &PlaylistEngine) -> Result<()> {
    let report = engine.genre_report();

    writeln!(out, "Genre Distribution:")?;
    for (genre, count) in &report.counts {
        writeln!(out, "{genre} : {count} track(s)")?;
    }
    for genre in &report.dominant {
        writeln!(
            out,
            "Genre '{genre}' dominates the playlist. Consider adding more variety."
        )?;
    }
    Ok(())
}

fn rate_track<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    let Some(title) = prompt(input, out, "Enter track title: ")? else {
        return Ok(());
    };
    let Some(rating) = prompt_number::<R, W, u8>(input, out, "Enter rating (1-5): ")? else {
        return Ok(());
    };

    match engine.rate(&title, rating) {
        Ok(_) => writeln!(out, "Rated \"{title}\" at {rating}.")?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn view_rated<W: Write>(out: &mut W, engine: &PlaylistEngine) -> Result<()> {
    let groups = engine.rated_tracks();
    if groups.is_empty() {
        writeln!(out, "No rated tracks.")?;
        return Ok(());
    }
    for (rating, tracks) in groups {
        writeln!(out, "Rating: {rating}")?;
        for track in tracks {
            writeln!(out, " - {} by {}", track.title, track.artist)?;
        }
    }
    Ok(())
}

fn lookup<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &PlaylistEngine,
) -> Result<()> {
    let Some(title) = prompt(input, out, "Enter title: ")? else {
        return Ok(());
    };

    match engine.lookup_by_title(&title) {
        Some(track) => writeln!(out, "Found: {track}")?,
        None => writeln!(out, "Track not found.")?,
    }
    Ok(())
}

fn undo<W: Write>(out: &mut W, engine: &mut PlaylistEngine) -> Result<()> {
    match engine.undo_last_play() {
        Ok(Some(track)) => writeln!(out, "Restored: {} (ID: {})", track.title, track.id)?,
        Ok(None) => writeln!(out, "No playback history.")?,
        Err(err) => writeln!(out, "Cannot restore: {err}")?,
    }
    Ok(())
}

fn play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    engine: &mut PlaylistEngine,
) -> Result<()> {
    let Some(title) = prompt(input, out, "Enter track title to play: ")? else {
        return Ok(());
    };

    match engine.play(&title) {
        Ok(track) => writeln!(out, "Now playing: {} by {}", track.title, track.artist)?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

/// Write a prompt and read one trimmed line; `None` means end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a number, reporting parse failures instead of erroring out
fn prompt_number<R: BufRead, W: Write, T: std::str::FromStr>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<T>> {
    let Some(raw) = prompt(input, out, label)? else {
        return Ok(None);
    };
    match raw.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Not a valid number: {raw}")?;
            Ok(None)
        }
    }
}
