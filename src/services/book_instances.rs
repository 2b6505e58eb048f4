//! Book instance (copy) pages

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{BookInstanceForm, BOOK_INSTANCE_LIST_URL, BOOK_INSTANCE_SCHEMA},
        BookInstanceDetails, BookTitle, NewBookInstance,
    },
    repository::Repository,
    validation::FieldError,
    views::{
        book_instances::{
            BookInstanceDeletePage, BookInstanceDetailPage, BookInstanceFormPage,
            BookInstanceListPage,
        },
        Outcome, Page,
    },
};

#[derive(Clone)]
pub struct BookInstanceService {
    repository: Repository,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Book copy {} not found", id))
}

/// Reported when the submitted id names no book
const UNKNOWN_BOOK: FieldError = FieldError {
    field: "book",
    message: "Book must be specified",
};

fn form_page(
    title: &str,
    book_list: Vec<BookTitle>,
    bookinstance: BookInstanceForm,
    errors: Vec<FieldError>,
) -> Outcome {
    let selected_book = Some(bookinstance.book.clone()).filter(|book| !book.is_empty());
    Page::BookInstanceForm(BookInstanceFormPage {
        title: title.to_string(),
        book_list,
        selected_book,
        bookinstance,
        errors,
    })
    .into()
}

impl BookInstanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    async fn find(&self, id: Uuid) -> AppResult<BookInstanceDetails> {
        self.repository
            .book_instances
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Show the form again with the submitted values and their errors
    async fn rejected(
        &self,
        title: &str,
        form: BookInstanceForm,
        errors: Vec<FieldError>,
    ) -> AppResult<Outcome> {
        let book_list = self.repository.books.list_titles().await?;
        Ok(form_page(title, book_list, form, errors))
    }

    pub async fn list(&self) -> AppResult<Outcome> {
        let bookinstance_list = self.repository.book_instances.list().await?;
        Ok(Page::BookInstanceList(BookInstanceListPage {
            title: "Book Instance List".to_string(),
            bookinstance_list,
        })
        .into())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<Outcome> {
        let bookinstance = self.find(id).await?;
        Ok(Page::BookInstanceDetail(BookInstanceDetailPage {
            title: format!("Copy: {}", bookinstance.book.title),
            bookinstance,
        })
        .into())
    }

    pub async fn create_form(&self) -> AppResult<Outcome> {
        let book_list = self.repository.books.list_titles().await?;
        Ok(form_page(
            "Create BookInstance",
            book_list,
            BookInstanceForm::default(),
            Vec::new(),
        ))
    }

    pub async fn create(&self, input: &HashMap<String, String>) -> AppResult<Outcome> {
        let validated = BOOK_INSTANCE_SCHEMA.apply(input);
        let form = BookInstanceForm::from(&validated);
        if !validated.is_valid() {
            return self
                .rejected("Create BookInstance", form, validated.into_errors())
                .await;
        }

        let data = NewBookInstance::try_from(&form)?;
        if self.repository.books.find_by_id(data.book_id).await?.is_none() {
            tracing::info!("Book copy create: book {} does not exist", data.book_id);
            return self
                .rejected("Create BookInstance", form, vec![UNKNOWN_BOOK])
                .await;
        }

        let instance = self.repository.book_instances.create(&data).await?;
        tracing::info!(
            "Book copy created: id={} book_id={} status={}",
            instance.id,
            instance.book_id,
            instance.status
        );
        Ok(Outcome::redirect(instance.url()))
    }

    pub async fn update_form(&self, id: Uuid) -> AppResult<Outcome> {
        let (bookinstance, book_list) = tokio::try_join!(
            self.repository.book_instances.find_by_id(id),
            self.repository.books.list_titles(),
        )?;
        let bookinstance = bookinstance.ok_or_else(|| not_found(id))?;
        Ok(form_page(
            "Update Book Instance",
            book_list,
            BookInstanceForm::from(&bookinstance.instance),
            Vec::new(),
        ))
    }

    pub async fn update(&self, id: Uuid, input: &HashMap<String, String>) -> AppResult<Outcome> {
        let validated = BOOK_INSTANCE_SCHEMA.apply(input);
        let form = BookInstanceForm::from(&validated);
        if !validated.is_valid() {
            return self
                .rejected("Update Book Instance", form, validated.into_errors())
                .await;
        }

        let data = NewBookInstance::try_from(&form)?;
        let (existing, book) = tokio::try_join!(
            self.repository.book_instances.find_by_id(id),
            self.repository.books.find_by_id(data.book_id),
        )?;
        if existing.is_none() {
            return Err(not_found(id));
        }
        if book.is_none() {
            tracing::info!("Book copy update: book {} does not exist", data.book_id);
            return self
                .rejected("Update Book Instance", form, vec![UNKNOWN_BOOK])
                .await;
        }

        let instance = self
            .repository
            .book_instances
            .update(id, &data)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Book copy updated: id={} status={}", instance.id, instance.status);
        Ok(Outcome::redirect(instance.url()))
    }

    pub async fn delete_form(&self, id: Uuid) -> AppResult<Outcome> {
        let bookinstance = self.find(id).await?;
        Ok(Page::BookInstanceDelete(BookInstanceDeletePage {
            title: "Delete Book Instance".to_string(),
            bookinstance,
        })
        .into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Outcome> {
        self.find(id).await?;
        self.repository.book_instances.delete(id).await?;
        tracing::info!("Book copy deleted: id={}", id);
        Ok(Outcome::redirect(BOOK_INSTANCE_LIST_URL))
    }
}
