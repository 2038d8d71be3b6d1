//! HTML rendering for the web page.
//!
//! Everything here is presentation: it receives shaped records and returns
//! markup. No function in this module talks to Spotify or touches the session.
//! Interpolated text from Spotify goes through [`escape`] first.

use html_to_string_macro::html;

use crate::{
    error::Error,
    types::{NicheReport, ShapedArtist, ShapedTrack, TimeRange},
    utils,
};

/// Escapes text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: String) -> String {
    html! {
        <html>
            <head>
                <meta charset="utf-8" />
                <title>{escape(title)}</title>
                <style>"
                body {
                    font-family: sans-serif;
                    max-width: 60rem;
                    margin: 2rem auto;
                    padding: 0 1rem
                }
                ol {
                    list-style: none;
                    padding: 0
                }
                li {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin: .5rem 0
                }
                img {
                    width: 100px;
                    height: 100px;
                    object-fit: cover
                }
                .missing {
                    width: 100px;
                    color: #888;
                    font-size: .8rem
                }
                .score {
                    font-size: 3rem;
                    text-align: center;
                    margin: 0
                }
                .columns {
                    display: flex;
                    gap: 2rem
                }
                .columns > section {
                    flex: 1
                }
                form {
                    display: inline-block;
                    margin-right: .5rem
                }
                "</style>
            </head>
            <body>
                <h1>"Welcome to Spotify (Re)Wrapped"</h1>
                {body}
            </body>
        </html>
    }
}

fn time_range_select(selected: TimeRange) -> String {
    let options = TimeRange::ALL
        .iter()
        .map(|range| {
            if *range == selected {
                html! { <option value={range.as_str()} selected>{range.label()}</option> }
            } else {
                html! { <option value={range.as_str()}>{range.label()}</option> }
            }
        })
        .collect::<String>();

    html! { <select name="time_range">{options}</select> }
}

fn action_form(action: &str, label: &str) -> String {
    html! {
        <form method="get" action={action}>
            {time_range_select(TimeRange::default())}
            <button>{label}</button>
        </form>
    }
}

pub fn index(authenticated: bool) -> String {
    let body = if authenticated {
        html! {
            <p><strong>"Choose an option:"</strong></p>
            {action_form("/top/tracks", "My Top Tracks 🎶")}
            {action_form("/top/artists", "My Top Artists 🎤")}
            {action_form("/niche", "How Niche Am I? ✨")}
        }
    } else {
        html! {
            <p>"1. Click the link below to authenticate with Spotify."</p>
            <p><a href="/login">"Authenticate with Spotify"</a></p>
        }
    };
    layout("Spotify (Re)Wrapped", body)
}

fn image_cell(url: Option<&str>, caption: &str) -> String {
    match url {
        Some(url) => {
            let caption = escape(caption);
            html! { <img src={escape(url)} alt={caption.clone()} title={caption} /> }
        }
        None => html! { <span class="missing">"Image not available"</span> },
    }
}

fn track_list(tracks: &[ShapedTrack]) -> String {
    let items = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| {
            let preview = track
                .preview_url
                .as_deref()
                .map(|url| html! { " " <audio controls src={escape(url)}></audio> })
                .unwrap_or_default();
            html! {
                <li>
                    {image_cell(track.album_image_url.as_deref(), &track.album_name)}
                    <div>
                        <strong>{idx + 1}". "<a href={escape(&track.track_url)}>{escape(&track.name)}</a></strong>
                        " by "{escape(&track.artist)}{preview}
                    </div>
                </li>
            }
        })
        .collect::<String>();

    html! { <ol>{items}</ol> }
}

fn artist_list(artists: &[ShapedArtist]) -> String {
    let items = artists
        .iter()
        .enumerate()
        .map(|(idx, artist)| {
            html! {
                <li>
                    {image_cell(artist.image_url.as_deref(), &artist.name)}
                    <div>
                        <strong>{idx + 1}". "<a href={escape(&artist.spotify_url)}>{escape(&artist.name)}</a></strong>
                    </div>
                </li>
            }
        })
        .collect::<String>();

    html! { <ol>{items}</ol> }
}

fn back_link() -> String {
    html! { <p><a href="/">"Back"</a></p> }
}

fn no_history(time_range: TimeRange) -> String {
    html! { <p>"No listening history for "{time_range.label()}"."</p> }
}

pub fn tracks(tracks: &[ShapedTrack], time_range: TimeRange) -> String {
    let body = if tracks.is_empty() {
        no_history(time_range)
    } else {
        html! {
            <h2>"Your Top Tracks ("{time_range.label()}")"</h2>
            {track_list(tracks)}
        }
    };
    layout("Your Top Tracks", body + &back_link())
}

pub fn artists(artists: &[ShapedArtist], time_range: TimeRange) -> String {
    let body = if artists.is_empty() {
        no_history(time_range)
    } else {
        html! {
            <h2>"Your Top Artists ("{time_range.label()}")"</h2>
            {artist_list(artists)}
        }
    };
    layout("Your Top Artists", body + &back_link())
}

pub fn niche(report: &NicheReport) -> String {
    let body = html! {
        <h2>"How Niche is Your Music Taste? ("{report.time_range.label()}")"</h2>
        <div class="columns">
            <section>
                <h3>"Average Track Popularity"</h3>
                <p class="score" style="color:green">{utils::format_score(report.average_track_popularity)}</p>
            </section>
            <section>
                <h3>"Average Artist Popularity"</h3>
                <p class="score" style="color:blue">{utils::format_score(report.average_artist_popularity)}</p>
            </section>
        </div>
        <ul>
            <li><strong>"Lower scores"</strong>" indicate a more niche music taste."</li>
            <li><strong>"Higher scores"</strong>" mean your music taste aligns with popular trends."</li>
        </ul>
        <div class="columns">
            <section>
                <h3>"Your Top 10 Unique Tracks"</h3>
                {track_list(&report.unique_tracks)}
            </section>
            <section>
                <h3>"Your Top 10 Unique Artists"</h3>
                {artist_list(&report.unique_artists)}
            </section>
        </div>
        {back_link()}
    };
    layout("How Niche Am I?", body)
}

pub fn login_complete() -> String {
    layout(
        "Authenticated",
        html! {
            <h2>"Authentication successful."</h2>
            <p>"Close this browser window and return to the terminal."</p>
        },
    )
}

pub fn error(err: &Error) -> String {
    let hint = match err {
        Error::Unauthorized(_) => html! {
            <p>"Your session has ended. "<a href="/login">"Authenticate with Spotify"</a>" again."</p>
        },
        Error::AuthExchange(_) => html! {
            <p><a href="/login">"Try logging in again"</a>"."</p>
        },
        Error::EmptyInput => html! {
            <p>"Unable to calculate niche scores without listening history."</p>
        },
        _ => back_link(),
    };
    layout(
        "Something went wrong",
        html! { <h4>{escape(&err.to_string())}</h4>{hint} },
    )
}

/// A short message page for requests that never reach the dispatcher.
pub fn notice(what: &str) -> String {
    layout(
        "Spotify (Re)Wrapped",
        html! { <h4>{escape(what)}</h4>{back_link()} },
    )
}
