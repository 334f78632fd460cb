pub async fn get_root() -> &'static str {
    "Backend is running"
}
