pub mod generate_comic_dto;
