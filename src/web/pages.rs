use std::fmt::Write;

use crate::library::Track;

pub(super) const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Jukebox</title>
<style>
  body { background: #111; color: #eee; font-family: sans-serif; margin: 1.5em; }
  button { font-size: 1.1em; margin: .2em; padding: .4em .9em; }
  #status { color: lightgreen; margin: 1em 0; }
  #songs { display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 1em; }
  .song { cursor: pointer; text-align: center; }
  .song img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 6px; }
  .artist { color: #aaa; font-size: .9em; }
</style>
</head>
<body>
<h2>Jukebox</h2>
<div>
  <button onclick="send('/prev')">Prev</button>
  <button onclick="send('/play')">Random</button>
  <button onclick="send('/pause')">Pause</button>
  <button onclick="send('/resume')">Resume</button>
  <button onclick="send('/stop')">Stop</button>
  <button onclick="send('/next')">Next</button>
  <button onclick="send('/rescan').then(loadLibrary)">Rescan</button>
</div>
<div id="status">...</div>
<div id="songs"></div>
<script>
async function send(path) {
  const res = await fetch(path);
  document.getElementById('status').textContent = await res.text();
}
async function loadLibrary() {
  const res = await fetch('/library_json');
  const songs = await res.json();
  const grid = document.getElementById('songs');
  grid.replaceChildren();
  for (const s of songs) {
    const el = document.createElement('div');
    el.className = 'song';
    const img = document.createElement('img');
    img.src = s.art;
    const title = document.createElement('div');
    title.textContent = s.title;
    const artist = document.createElement('div');
    artist.className = 'artist';
    artist.textContent = s.artist;
    el.append(img, title, artist);
    el.onclick = () => send('/play_song/' + encodeURIComponent(s.filename));
    grid.appendChild(el);
  }
}
setInterval(() => send('/status'), 3000);
send('/status');
loadLibrary();
</script>
</body>
</html>
"#;

pub(super) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub(super) fn library_html(tracks: &[Track]) -> String {
    let mut html = String::from("<h2>Music Library</h2>\n");
    for track in tracks {
        let _ = writeln!(
            html,
            "<p><a href='/play_song/{}' style='color:lightgreen;text-decoration:none;'>{}</a></p>",
            urlencoding::encode(&track.file_name),
            escape_html(&track.file_name),
        );
    }
    html.push_str("<p><a href='/'>Back</a></p>\n");
    html
}
