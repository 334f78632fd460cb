pub mod upstream_comic_response;
