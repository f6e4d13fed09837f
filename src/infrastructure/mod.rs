pub mod models;
pub mod supabase;

pub use supabase::{get_supabase_server, SupabaseClient, SupabaseFactory};
