//! JSON API server for the scoring engine.
//!
//! Exposes the three scorers over HTTP using Axum so server-side
//! collaborators outside this process (application submission, admin
//! audits) can call them without linking the library.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! match-engine serve
//!
//! # Custom port
//! match-engine serve --port 3000
//!
//! # Bind to all interfaces
//! match-engine serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/skills/resolve` - Resolve free-text skill labels to catalog ids
//! - `POST /api/match/score` - Score a listing/profile pair
//! - `POST /api/quality/audit` - Audit a listing's trust signals
//! - `GET /api/catalog` - List all skills in the catalog

pub mod server;
