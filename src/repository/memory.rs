//! In-memory catalog store.
//!
//! Implements every repository trait over shared `DashMap`s so the server can
//! run without PostgreSQL and tests get a real store to exercise.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use super::{
    authors::AuthorRepository, book_instances::BookInstanceRepository, books::BookRepository,
    genres::GenreRepository,
};
use crate::{
    error::{AppError, AppResult},
    models::{
        Author, Book, BookInstance, BookInstanceDetails, BookInstanceStatus, BookTitle, Genre,
        NewBookInstance, NewGenre,
    },
};

#[derive(Clone, Default)]
pub struct MemoryStore {
    genres: Arc<DashMap<Uuid, Genre>>,
    books: Arc<DashMap<Uuid, Book>>,
    book_instances: Arc<DashMap<Uuid, BookInstance>>,
    authors: Arc<DashMap<Uuid, Author>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books and authors have no write workflow; load them directly.
    pub fn insert_book(&self, book: Book) {
        self.books.insert(book.id, book);
    }

    pub fn insert_author(&self, author: Author) {
        self.authors.insert(author.id, author);
    }

    pub fn insert_genre(&self, genre: Genre) {
        self.genres.insert(genre.id, genre);
    }

    pub fn insert_book_instance(&self, instance: BookInstance) {
        self.book_instances.insert(instance.id, instance);
    }

    fn book_title(&self, book_id: Uuid) -> BookTitle {
        BookTitle {
            id: book_id,
            title: self
                .books
                .get(&book_id)
                .map(|b| b.title.clone())
                .unwrap_or_default(),
        }
    }

    fn details(&self, instance: BookInstance) -> BookInstanceDetails {
        BookInstanceDetails {
            book: self.book_title(instance.book_id),
            instance,
        }
    }

    /// Small demo catalog for running the memory backend by hand
    pub fn seed_sample_catalog(&self) {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);

        let fantasy = Genre {
            id: Uuid::new_v4(),
            name: "Fantasy".to_string(),
        };
        let science_fiction = Genre {
            id: Uuid::new_v4(),
            name: "Science Fiction".to_string(),
        };
        let poetry = Genre {
            id: Uuid::new_v4(),
            name: "French Poetry".to_string(),
        };

        let rothfuss = Author {
            id: Uuid::new_v4(),
            first_name: "Patrick".to_string(),
            family_name: "Rothfuss".to_string(),
            date_of_birth: date(1973, 6, 6),
            date_of_death: None,
        };
        let asimov = Author {
            id: Uuid::new_v4(),
            first_name: "Isaac".to_string(),
            family_name: "Asimov".to_string(),
            date_of_birth: date(1920, 1, 2),
            date_of_death: date(1992, 4, 6),
        };

        let name_of_the_wind = Book {
            id: Uuid::new_v4(),
            title: "The Name of the Wind".to_string(),
            author_id: rothfuss.id,
            summary: "The tale of Kvothe, from his childhood in a troupe of traveling players to his years as a near-feral orphan.".to_string(),
            isbn: "9781473211896".to_string(),
            genre_ids: vec![fantasy.id],
        };
        let gods_themselves = Book {
            id: Uuid::new_v4(),
            title: "The Gods Themselves".to_string(),
            author_id: asimov.id,
            summary: "In the twenty-second century a chemist discovers a way to exchange matter with a parallel universe.".to_string(),
            isbn: "9780553293388".to_string(),
            genre_ids: vec![science_fiction.id],
        };

        let instances = [
            (name_of_the_wind.id, "London Gollancz, 2014.", BookInstanceStatus::Available, None),
            (name_of_the_wind.id, "Gollancz, 2011.", BookInstanceStatus::Loaned, date(2024, 5, 17)),
            (gods_themselves.id, "New York Tom Doherty Associates, 2016.", BookInstanceStatus::Maintenance, None),
            (gods_themselves.id, "New York, NY Tom Doherty Associates, LLC, 2015.", BookInstanceStatus::Available, None),
        ];

        for genre in [fantasy, science_fiction, poetry] {
            self.insert_genre(genre);
        }
        for author in [rothfuss, asimov] {
            self.insert_author(author);
        }
        for book in [name_of_the_wind, gods_themselves] {
            self.insert_book(book);
        }
        for (book_id, imprint, status, due_back) in instances {
            self.insert_book_instance(BookInstance {
                id: Uuid::new_v4(),
                book_id,
                imprint: imprint.to_string(),
                status,
                due_back,
            });
        }
    }
}

#[async_trait]
impl GenreRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = self.genres.iter().map(|e| e.value().clone()).collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Genre>> {
        Ok(self.genres.get(&id).map(|g| g.clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        Ok(self
            .genres
            .iter()
            .find(|e| e.value().name == name)
            .map(|e| e.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = ids
            .iter()
            .filter_map(|id| self.genres.get(id).map(|g| g.clone()))
            .collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn create(&self, data: &NewGenre) -> AppResult<Genre> {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: data.name.clone(),
        };
        self.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn update(&self, id: Uuid, data: &NewGenre) -> AppResult<Option<Genre>> {
        Ok(self.genres.get_mut(&id).map(|mut genre| {
            genre.name = data.name.clone();
            genre.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.genres
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.genres.len() as i64)
    }
}

#[async_trait]
impl BookRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self.books.iter().map(|e| e.value().clone()).collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn list_titles(&self) -> AppResult<Vec<BookTitle>> {
        let books = BookRepository::list(self).await?;
        Ok(books.iter().map(BookTitle::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.get(&id).map(|b| b.clone()))
    }

    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        let books = BookRepository::list(self).await?;
        Ok(books.into_iter().filter(|b| b.in_genre(genre_id)).collect())
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        let books = BookRepository::list(self).await?;
        Ok(books.into_iter().filter(|b| b.author_id == author_id).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.books.len() as i64)
    }
}

#[async_trait]
impl BookInstanceRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<BookInstanceDetails>> {
        let instances: Vec<BookInstance> = self
            .book_instances
            .iter()
            .map(|e| e.value().clone())
            .collect();
        let mut details: Vec<BookInstanceDetails> =
            instances.into_iter().map(|i| self.details(i)).collect();
        details.sort_by(|a, b| {
            (&a.book.title, &a.instance.imprint).cmp(&(&b.book.title, &b.instance.imprint))
        });
        Ok(details)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BookInstanceDetails>> {
        let instance = self.book_instances.get(&id).map(|i| i.clone());
        Ok(instance.map(|i| self.details(i)))
    }

    async fn find_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        let mut instances: Vec<BookInstance> = self
            .book_instances
            .iter()
            .filter(|e| e.value().book_id == book_id)
            .map(|e| e.value().clone())
            .collect();
        instances.sort_by(|a, b| a.imprint.cmp(&b.imprint));
        Ok(instances)
    }

    async fn create(&self, data: &NewBookInstance) -> AppResult<BookInstance> {
        let instance = BookInstance {
            id: Uuid::new_v4(),
            book_id: data.book_id,
            imprint: data.imprint.clone(),
            status: data.status,
            due_back: data.due_back,
        };
        self.book_instances.insert(instance.id, instance.clone());
        Ok(instance)
    }

    async fn update(&self, id: Uuid, data: &NewBookInstance) -> AppResult<Option<BookInstance>> {
        Ok(self.book_instances.get_mut(&id).map(|mut instance| {
            instance.book_id = data.book_id;
            instance.imprint = data.imprint.clone();
            instance.status = data.status;
            instance.due_back = data.due_back;
            instance.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.book_instances
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.book_instances.len() as i64)
    }

    async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64> {
        Ok(self
            .book_instances
            .iter()
            .filter(|e| e.value().status == status)
            .count() as i64)
    }
}

#[async_trait]
impl AuthorRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.authors.iter().map(|e| e.value().clone()).collect();
        authors.sort_by(|a, b| {
            (&a.family_name, &a.first_name).cmp(&(&b.family_name, &b.first_name))
        });
        Ok(authors)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        Ok(self.authors.get(&id).map(|a| a.clone()))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.authors.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_genres_sorted_by_name() {
        let store = MemoryStore::new();
        for name in ["Poetry", "Fantasy", "Horror"] {
            GenreRepository::create(&store, &NewGenre { name: name.to_string() })
                .await
                .unwrap();
        }

        let names: Vec<_> = GenreRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Fantasy", "Horror", "Poetry"]);
    }

    #[tokio::test]
    async fn test_update_missing_genre_returns_none() {
        let store = MemoryStore::new();
        let result = GenreRepository::update(&store, Uuid::new_v4(), &NewGenre { name: "x".into() })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = BookInstanceRepository::delete(&store, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_seed_sample_catalog() {
        let store = MemoryStore::new();
        store.seed_sample_catalog();

        assert_eq!(GenreRepository::count(&store).await.unwrap(), 3);
        assert_eq!(BookRepository::count(&store).await.unwrap(), 2);
        assert_eq!(AuthorRepository::count(&store).await.unwrap(), 2);
        assert_eq!(
            BookInstanceRepository::count_by_status(&store, BookInstanceStatus::Available)
                .await
                .unwrap(),
            2
        );

        let copies = BookInstanceRepository::list(&store).await.unwrap();
        assert_eq!(copies.len(), 4);
        assert!(copies.iter().all(|c| !c.book.title.is_empty()));
    }
}
