/**
 * Page Handlers
 *
 * Server-rendered HTML for the browser side of the app: the index, the login
 * form that posts to `/login`, the page a successful login lands on, and the
 * bonus page that only logged-in users can see.
 *
 * Stylesheets and images are served separately from `/static`.
 */

use axum::response::Html;

use crate::backend::middleware::AuthUser;

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
{body}
</body>
</html>
"#
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// GET /
pub async fn index() -> Html<String> {
    layout(
        "pagegate",
        r#"<h1>Welcome</h1>
<p><a href="/login">Log in</a> to see the <a href="/bonus">bonus page</a>.</p>"#,
    )
}

/// GET /login
pub async fn login_form() -> Html<String> {
    layout(
        "Log in",
        r#"<h1>Log in</h1>
<form method="post" action="/login">
  <label>Username <input name="username" autocomplete="username" required></label>
  <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
  <button type="submit">Log in</button>
</form>"#,
    )
}

/// GET /suc_oauth
pub async fn login_success() -> Html<String> {
    layout(
        "Logged in",
        r#"<h1>You are logged in</h1>
<p>Continue to the <a href="/bonus">bonus page</a>.</p>
<form method="post" action="/logout"><button type="submit">Log out</button></form>"#,
    )
}

/// GET /bonus (guarded)
pub async fn bonus(AuthUser(identity): AuthUser) -> Html<String> {
    let body = format!(
        "<h1>Bonus</h1>\n<p>Hello, {}! This page is only for logged-in users.</p>",
        escape_html(&identity.username)
    );
    layout("Bonus", &body)
}
