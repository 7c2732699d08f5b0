use payloads::{
    ApiClient, Category, CategoryId, ClientError, Comment, CommentId, Order,
    OrderId, Product, ProductId, User, UserId, requests,
};

use crate::resource::{Identify, ResourceEvent, display_error};

/// Uniform surface over one REST resource of the backend.
///
/// The store and the UI hooks are generic over this, so all five entity
/// pages share a single implementation of the list/create/delete state
/// discipline. Implementations are thin delegations to [`ApiClient`].
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    type Item: Identify + Clone + 'static;
    type Draft;

    /// Lowercase singular noun used in fallback error messages.
    const SINGULAR: &'static str;
    /// Lowercase plural noun used in fallback error messages.
    const PLURAL: &'static str;

    async fn list(&self) -> Result<Vec<Self::Item>, ClientError>;
    async fn fetch(
        &self,
        id: &<Self::Item as Identify>::Id,
    ) -> Result<Self::Item, ClientError>;
    async fn create(
        &self,
        draft: &Self::Draft,
    ) -> Result<Self::Item, ClientError>;
    async fn delete(
        &self,
        id: &<Self::Item as Identify>::Id,
    ) -> Result<(), ClientError>;
}

/// Capability for resources whose backend exposes an update route. Only
/// orders have one.
#[allow(async_fn_in_trait)]
pub trait UpdatableApi: ResourceApi {
    type Patch;

    async fn update(
        &self,
        id: &<Self::Item as Identify>::Id,
        patch: &Self::Patch,
    ) -> Result<Self::Item, ClientError>;
}

/// Run one list call and fold the outcome into the event the state
/// machine consumes.
///
/// The `run_*` functions are shared by the headless store and the UI
/// hooks, so each fallback message is written exactly once.
pub async fn run_list<A: ResourceApi>(api: &A) -> ResourceEvent<A::Item> {
    let result = api.list().await.map_err(|e| {
        display_error(&e, &format!("Error fetching {}", A::PLURAL))
    });
    ResourceEvent::ListLoaded(result)
}

pub async fn run_fetch<A: ResourceApi>(
    api: &A,
    id: &<A::Item as Identify>::Id,
) -> ResourceEvent<A::Item> {
    let result = api.fetch(id).await.map_err(|e| {
        display_error(
            &e,
            &format!("Error fetching {} with id: {id}", A::SINGULAR),
        )
    });
    ResourceEvent::ItemLoaded(result)
}

/// Also hands the raw result back so a modal caller can stay open on
/// failure.
pub async fn run_create<A: ResourceApi>(
    api: &A,
    draft: &A::Draft,
) -> (Result<A::Item, ClientError>, ResourceEvent<A::Item>) {
    let result = api.create(draft).await;
    let event = match &result {
        Ok(item) => ResourceEvent::Created(Ok(item.clone())),
        Err(e) => ResourceEvent::Created(Err(display_error(
            e,
            &format!("Error creating {}", A::SINGULAR),
        ))),
    };
    (result, event)
}

pub async fn run_delete<A: ResourceApi>(
    api: &A,
    id: &<A::Item as Identify>::Id,
) -> ResourceEvent<A::Item> {
    match api.delete(id).await {
        Ok(()) => ResourceEvent::Deleted(id.clone(), Ok(())),
        Err(e) => ResourceEvent::Deleted(
            id.clone(),
            Err(display_error(
                &e,
                &format!("Error deleting {} with id: {id}", A::SINGULAR),
            )),
        ),
    }
}

pub async fn run_update<A: UpdatableApi>(
    api: &A,
    id: &<A::Item as Identify>::Id,
    patch: &A::Patch,
) -> (Result<A::Item, ClientError>, ResourceEvent<A::Item>) {
    let result = api.update(id, patch).await;
    let event = match &result {
        Ok(_) => ResourceEvent::Updated(Ok(())),
        Err(e) => ResourceEvent::Updated(Err(display_error(
            e,
            &format!("Error updating {} with id: {id}", A::SINGULAR),
        ))),
    };
    (result, event)
}

#[derive(Clone)]
pub struct CommentsApi {
    pub client: ApiClient,
}

impl ResourceApi for CommentsApi {
    type Item = Comment;
    type Draft = requests::CreateComment;

    const SINGULAR: &'static str = "comment";
    const PLURAL: &'static str = "comments";

    async fn list(&self) -> Result<Vec<Comment>, ClientError> {
        self.client.comments().await
    }

    async fn fetch(&self, id: &CommentId) -> Result<Comment, ClientError> {
        self.client.comment(id).await
    }

    async fn create(
        &self,
        draft: &requests::CreateComment,
    ) -> Result<Comment, ClientError> {
        self.client.create_comment(draft).await
    }

    async fn delete(&self, id: &CommentId) -> Result<(), ClientError> {
        self.client.delete_comment(id).await
    }
}

#[derive(Clone)]
pub struct OrdersApi {
    pub client: ApiClient,
}

impl ResourceApi for OrdersApi {
    type Item = Order;
    type Draft = requests::CreateOrder;

    const SINGULAR: &'static str = "order";
    const PLURAL: &'static str = "orders";

    async fn list(&self) -> Result<Vec<Order>, ClientError> {
        self.client.orders().await
    }

    async fn fetch(&self, id: &OrderId) -> Result<Order, ClientError> {
        self.client.order(id).await
    }

    async fn create(
        &self,
        draft: &requests::CreateOrder,
    ) -> Result<Order, ClientError> {
        self.client.create_order(draft).await
    }

    async fn delete(&self, id: &OrderId) -> Result<(), ClientError> {
        self.client.delete_order(id).await
    }
}

impl UpdatableApi for OrdersApi {
    type Patch = requests::UpdateOrder;

    async fn update(
        &self,
        id: &OrderId,
        patch: &requests::UpdateOrder,
    ) -> Result<Order, ClientError> {
        self.client.update_order(id, patch).await
    }
}

#[derive(Clone)]
pub struct UsersApi {
    pub client: ApiClient,
}

impl ResourceApi for UsersApi {
    type Item = User;
    type Draft = requests::CreateUser;

    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    async fn list(&self) -> Result<Vec<User>, ClientError> {
        self.client.users().await
    }

    async fn fetch(&self, id: &UserId) -> Result<User, ClientError> {
        self.client.user(id).await
    }

    async fn create(
        &self,
        draft: &requests::CreateUser,
    ) -> Result<User, ClientError> {
        self.client.create_user(draft).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), ClientError> {
        self.client.delete_user(id).await
    }
}

#[derive(Clone)]
pub struct ProductsApi {
    pub client: ApiClient,
}

impl ResourceApi for ProductsApi {
    type Item = Product;
    type Draft = requests::CreateProduct;

    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        self.client.products().await
    }

    async fn fetch(&self, id: &ProductId) -> Result<Product, ClientError> {
        self.client.product(id).await
    }

    async fn create(
        &self,
        draft: &requests::CreateProduct,
    ) -> Result<Product, ClientError> {
        self.client.create_product(draft).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ClientError> {
        self.client.delete_product(id).await
    }
}

#[derive(Clone)]
pub struct CategoriesApi {
    pub client: ApiClient,
}

impl ResourceApi for CategoriesApi {
    type Item = Category;
    type Draft = requests::CreateCategory;

    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    async fn list(&self) -> Result<Vec<Category>, ClientError> {
        self.client.categories().await
    }

    async fn fetch(&self, id: &CategoryId) -> Result<Category, ClientError> {
        self.client.category(id).await
    }

    async fn create(
        &self,
        draft: &requests::CreateCategory,
    ) -> Result<Category, ClientError> {
        self.client.create_category(draft).await
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), ClientError> {
        self.client.delete_category(id).await
    }
}
