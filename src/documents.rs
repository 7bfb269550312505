//! Canned document bodies the editor swaps in when a file is activated.

pub(crate) const WELCOME_TAB: &str = "welcome.tsx";

pub(crate) const WELCOME_TSX: &str = r#"// Welcome to CodeCraft Studio
// A modern, feature-rich code editor

import React, { useState, useEffect } from 'react';

interface User {
  id: number;
  name: string;
  email: string;
}

function UserProfile({ userId }: { userId: number }) {
  const [user, setUser] = useState<User | null>(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState<string | null>(null);

  useEffect(() => {
    async function fetchUser() {
      try {
        const response = await fetch(`https://api.example.com/users/${userId}`);

        if (!response.ok) {
          throw new Error('Failed to fetch user data');
        }

        const userData = await response.json();
        setUser(userData);
        setLoading(false);
      } catch (err) {
        setError(err instanceof Error ? err.message : 'An unknown error occurred');
        setLoading(false);
        console.log('Error fetching user:', err);
      }
    }

    fetchUser();
  }, [userId]);

  if (loading) return <div>Loading...</div>;
  if (error) return <div>Error: {error}</div>;
  if (!user) return <div>No user found</div>;

  return (
    <div className="user-profile">
      <h2>{user.name}</h2>
      <p>{user.email}</p>
      <button onClick={() => console.log('User profile viewed')}>
        Contact User
      </button>
    </div>
  );
}

export default UserProfile;
"#;

const INDEX_CSS: &str = r#"/* CSS styles for the application */

body {
  margin: 0;
  padding: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen,
    Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem;
}

.button {
  background-color: #0078d4;
  color: white;
  border: none;
  padding: 8px 16px;
  border-radius: 2px;
  cursor: pointer;
}

.button:hover {
  background-color: #106ebe;
}
"#;

const PACKAGE_JSON: &str = r#"{
  "name": "codecraft-studio",
  "version": "1.0.0",
  "description": "A modern, feature-rich code editor",
  "main": "index.js",
  "scripts": {
    "start": "vite",
    "build": "vite build",
    "test": "vitest"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  }
}"#;

const README_MD: &str = r#"# CodeCraft Studio

A modern, feature-rich code editor built with React and TypeScript.

## Features

- Syntax highlighting
- File explorer
- Terminal integration
- AI assistant
- Error detection
- Git integration
- Extensions marketplace

## Getting Started

1. Clone the repository
2. Install dependencies with `npm install`
3. Start the development server with `npm start`

## License

MIT
"#;

/// Body to load for a file with this extension. `None` keeps the current
/// document, which is what TypeScript files and unknown types do.
pub(crate) fn template_for_extension(extension: Option<&str>) -> Option<&'static str> {
    match extension? {
        "css" => Some(INDEX_CSS),
        "json" => Some(PACKAGE_JSON),
        "md" => Some(README_MD),
        _ => None,
    }
}

pub(crate) fn language_for_extension(extension: Option<&str>) -> &'static str {
    match extension {
        Some("ts" | "tsx") => "typescript",
        Some("js" | "jsx") => "javascript",
        Some("css") => "css",
        Some("json") => "json",
        Some("md") => "markdown",
        Some("html") => "html",
        _ => "plaintext",
    }
}
