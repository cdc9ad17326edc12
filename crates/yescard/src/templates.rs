//! HTML for the login page.

use yescard_core::discovery::LOGIN_PATH;

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Login form pre-filled with the default identity.
///
/// The flow parameters ride along as hidden fields so `/login` needs no
/// server-side session.
pub fn login_page(default_email: &str, redirect_uri: &str, state: &str, scope: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Yes Card Sign In (TEST ONLY)</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            max-width: 400px;
            margin: 100px auto;
            padding: 20px;
        }}
        .warning {{
            background: #fff3cd;
            border: 1px solid #ffc107;
            padding: 15px;
            border-radius: 8px;
            margin-bottom: 20px;
        }}
        .warning h2 {{
            color: #856404;
            margin-top: 0;
        }}
        form {{
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
        }}
        label {{
            display: block;
            margin-bottom: 5px;
            font-weight: 500;
        }}
        input[type="email"] {{
            width: 100%;
            padding: 10px;
            margin-bottom: 15px;
            border: 1px solid #ced4da;
            border-radius: 4px;
            box-sizing: border-box;
        }}
        button {{
            width: 100%;
            padding: 12px;
            background: #007bff;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
        }}
    </style>
</head>
<body>
    <div class="warning">
        <h2>Test Only</h2>
        <p>This provider accepts <strong>any</strong> login.</p>
        <p>The email you submit is the identity the client will receive.</p>
    </div>

    <form action="{action}" method="POST">
        <input type="hidden" name="redirect_uri" value="{redirect_uri}" />
        <input type="hidden" name="state" value="{state}" />
        <input type="hidden" name="scope" value="{scope}" />

        <label for="email">Email Address</label>
        <input type="email" id="email" name="email" value="{email}" />

        <button type="submit">Sign in</button>
    </form>
</body>
</html>"#,
        action = LOGIN_PATH,
        redirect_uri = html_escape(redirect_uri),
        state = html_escape(state),
        scope = html_escape(scope),
        email = html_escape(default_email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_prefills_default_email() {
        let html = login_page("admin@scratchorg.com", "https://x.test/cb", "abc", "openid");
        assert!(html.contains(r#"value="admin@scratchorg.com""#));
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="state" value="abc""#));
    }

    #[test]
    fn login_page_escapes_parameters() {
        let html = login_page("a@b.c", "https://x.test/cb?a=1&b=2", r#""><script>"#, "");
        assert!(html.contains("https://x.test/cb?a=1&amp;b=2"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
