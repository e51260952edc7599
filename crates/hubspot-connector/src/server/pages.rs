//! HTML returned to the OAuth popup.

/// Page served after a successful callback. Closing the window tells the
/// opener that authorization finished.
pub const CLOSE_WINDOW_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>HubSpot connected</title>
</head>
<body>
<script>
    window.close();
</script>
</body>
</html>"#;
