//! Genre pages: list, detail, create/update forms and guarded delete

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        genre::{GenreForm, GENRE_LIST_URL, GENRE_SCHEMA},
        Book, Genre, NewGenre,
    },
    repository::Repository,
    validation::FieldError,
    views::{
        genres::{GenreDeletePage, GenreDetailPage, GenreFormPage, GenreListPage},
        Outcome, Page,
    },
};

#[derive(Clone)]
pub struct GenreService {
    repository: Repository,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Genre {} not found", id))
}

fn form_page(title: &str, genre: GenreForm, errors: Vec<FieldError>) -> Outcome {
    Page::GenreForm(GenreFormPage {
        title: title.to_string(),
        genre,
        errors,
    })
    .into()
}

fn delete_page(genre: Genre, genre_books: Vec<Book>) -> Outcome {
    Page::GenreDelete(GenreDeletePage {
        title: "Delete Genre".to_string(),
        genre,
        genre_books,
    })
    .into()
}

impl GenreService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Genre and the books filed under it, looked up concurrently
    async fn genre_with_books(&self, id: Uuid) -> AppResult<(Genre, Vec<Book>)> {
        let (genre, genre_books) = tokio::try_join!(
            self.repository.genres.find_by_id(id),
            self.repository.books.find_by_genre(id),
        )?;
        let genre = genre.ok_or_else(|| not_found(id))?;
        Ok((genre, genre_books))
    }

    pub async fn list(&self) -> AppResult<Outcome> {
        let genre_list = self.repository.genres.list().await?;
        Ok(Page::GenreList(GenreListPage {
            title: "Genre List".to_string(),
            genre_list,
        })
        .into())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<Outcome> {
        let (genre, genre_books) = self.genre_with_books(id).await?;
        Ok(Page::GenreDetail(GenreDetailPage {
            title: "Genre Detail".to_string(),
            genre,
            genre_books,
        })
        .into())
    }

    pub fn create_form(&self) -> Outcome {
        form_page("Create Genre", GenreForm::default(), Vec::new())
    }

    /// Create a genre unless one with the same name exists, in which case
    /// the existing genre is reused.
    pub async fn create(&self, input: &HashMap<String, String>) -> AppResult<Outcome> {
        let validated = GENRE_SCHEMA.apply(input);
        let form = GenreForm::from(&validated);
        if !validated.is_valid() {
            return Ok(form_page("Create Genre", form, validated.into_errors()));
        }

        if let Some(existing) = self.repository.genres.find_by_name(&form.name).await? {
            tracing::info!(
                "Genre create: '{}' already exists as id={}, reusing it",
                existing.name,
                existing.id
            );
            return Ok(Outcome::redirect(existing.url()));
        }

        let genre = self.repository.genres.create(&NewGenre::from(&form)).await?;
        tracing::info!("Genre created: id={} name='{}'", genre.id, genre.name);
        Ok(Outcome::redirect(genre.url()))
    }

    pub async fn update_form(&self, id: Uuid) -> AppResult<Outcome> {
        let genre = self
            .repository
            .genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(form_page("Update Genre", GenreForm::from(&genre), Vec::new()))
    }

    pub async fn update(&self, id: Uuid, input: &HashMap<String, String>) -> AppResult<Outcome> {
        let validated = GENRE_SCHEMA.apply(input);
        let form = GenreForm::from(&validated);
        if !validated.is_valid() {
            return Ok(form_page("Update Genre", form, validated.into_errors()));
        }

        let genre = self
            .repository
            .genres
            .update(id, &NewGenre::from(&form))
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Genre updated: id={}", genre.id);
        Ok(Outcome::redirect(genre.url()))
    }

    pub async fn delete_form(&self, id: Uuid) -> AppResult<Outcome> {
        let (genre, genre_books) = self.genre_with_books(id).await?;
        Ok(delete_page(genre, genre_books))
    }

    /// Delete a genre that no book references; otherwise show the books
    /// that must go first.
    pub async fn delete(&self, id: Uuid) -> AppResult<Outcome> {
        let (genre, genre_books) = self.genre_with_books(id).await?;
        if !genre_books.is_empty() {
            tracing::info!(
                "Genre delete blocked: id={} still has {} book(s)",
                id,
                genre_books.len()
            );
            return Ok(delete_page(genre, genre_books));
        }

        self.repository.genres.delete(id).await?;
        tracing::info!("Genre deleted: id={}", id);
        Ok(Outcome::redirect(GENRE_LIST_URL))
    }
}
