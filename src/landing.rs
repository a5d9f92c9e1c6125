// The generated "new tab" page. Cosmetic except for its address: every new
// or reset tab starts on this document, and its data: URI is the sentinel
// the address bar suppresses.

use url::Url;

/// Static landing document shown in every fresh tab.
pub fn new_tab_html() -> String {
    r#"<html>
    <head>
        <style>
            body {
                background: radial-gradient(circle, #1e1e1e 0%, #121212 100%);
                color: white;
                font-family: 'Segoe UI', sans-serif;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: 100vh;
                margin: 0;
            }
            h1 { font-size: 48px; margin-bottom: 10px; letter-spacing: -1px; }
            .search-box {
                width: 500px;
                padding: 15px 25px;
                border-radius: 30px;
                border: 1px solid #444;
                background: #2a2a2a;
                color: white;
                font-size: 18px;
                outline: none;
            }
            .search-box:focus { border-color: #0078d4; }
            .footer { position: absolute; bottom: 20px; color: #555; font-size: 12px; }
        </style>
    </head>
    <body>
        <h1>Slate</h1>
        <p style="color: #888;">Where do you want to go today?</p>
        <input type="text" class="search-box" placeholder="Search..."
            onkeydown="if (event.key === 'Enter') window.location.href = 'https://www.google.com/search?q=' + this.value">
        <div class="footer">Slate Browser</div>
    </body>
</html>
"#
    .to_string()
}

/// The sentinel address every fresh or reset tab starts on: the landing
/// document wrapped as a data: URI the engine can load directly.
pub fn landing_address() -> String {
    format!("data:text/html,{}", urlencoding::encode(&new_tab_html()))
}

/// True for any inline data: document. The address bar suppresses every
/// such address rather than matching the sentinel byte-for-byte, so the
/// landing page stays hidden even after the engine normalizes the URI.
pub fn is_landing_address(address: &str) -> bool {
    Url::parse(address)
        .map(|u| u.scheme() == "data")
        .unwrap_or(false)
}
