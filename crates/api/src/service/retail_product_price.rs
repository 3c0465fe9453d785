use crate::{
    abstract_trait::{
        DynProductRepository, DynRetailProductPriceRepository, DynRetailProductRepository,
        DynRetailRepository, RetailProductPriceServiceTrait,
    },
    domain::{
        requests::{CreatePriceRequest, UpdatePriceRequest},
        response::ApiResponse,
    },
    model::RetailProductPrice,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::errors::ServiceError;

pub struct RetailProductPriceService {
    repository: DynRetailProductPriceRepository,
    retail_repository: DynRetailRepository,
    product_repository: DynProductRepository,
    retail_product_repository: DynRetailProductRepository,
}

impl RetailProductPriceService {
    pub fn new(
        repository: DynRetailProductPriceRepository,
        retail_repository: DynRetailRepository,
        product_repository: DynProductRepository,
        retail_product_repository: DynRetailProductRepository,
    ) -> Self {
        Self {
            repository,
            retail_repository,
            product_repository,
            retail_product_repository,
        }
    }

    /// The referenced retail, product and their association must all exist
    /// before a temporal record may be attached to the pair.
    async fn ensure_pair_exists(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<(), ServiceError> {
        self.retail_repository
            .find_by_id(retail_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;
        self.product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product not found"))?;
        self.retail_product_repository
            .find_by_key((retail_id, product_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product not found"))?;
        Ok(())
    }

    fn check_interval(
        date_from: DateTime<Utc>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<(), ServiceError> {
        if let Some(date_to) = date_to
            && date_to <= date_from
        {
            return Err(ServiceError::validation("dateTo must be after dateFrom"));
        }
        Ok(())
    }

    fn check_price(price: Decimal) -> Result<(), ServiceError> {
        if price < Decimal::ZERO {
            return Err(ServiceError::validation("Price must not be negative"));
        }
        Ok(())
    }
}

#[async_trait]
impl RetailProductPriceServiceTrait for RetailProductPriceService {
    async fn get_prices(&self) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError> {
        let prices = self.repository.find_all().await?;
        if prices.is_empty() {
            return Err(ServiceError::not_found("No retail product prices found"));
        }
        Ok(ApiResponse::ok(
            "Retail product prices retrieved successfully",
            prices,
        ))
    }

    async fn get_prices_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError> {
        let prices = self.repository.find_by_retail(retail_id).await?;
        if prices.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product prices found for this retail",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product prices retrieved successfully",
            prices,
        ))
    }

    async fn get_prices_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError> {
        let prices = self.repository.find_by_product(product_id).await?;
        if prices.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product prices found for this product",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product prices retrieved successfully",
            prices,
        ))
    }

    async fn get_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError> {
        let price = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product price not found"))?;
        Ok(ApiResponse::ok(
            "Retail product price retrieved successfully",
            price,
        ))
    }

    async fn get_prices_of_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError> {
        let prices = self.repository.find_by_pair(retail_id, product_id).await?;
        if prices.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product prices found for this retail product",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product prices retrieved successfully",
            prices,
        ))
    }

    async fn get_current_price(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError> {
        let price = self
            .repository
            .find_current(retail_id, product_id, as_of)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("No current price found for this retail product")
            })?;
        Ok(ApiResponse::ok(
            "Current retail product price retrieved successfully",
            price,
        ))
    }

    async fn create_price(
        &self,
        req: &CreatePriceRequest,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError> {
        Self::check_interval(req.date_from, req.date_to)?;
        Self::check_price(req.price)?;
        self.ensure_pair_exists(req.retail_id, req.product_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_key((req.retail_id, req.product_id, req.date_from))
            .await?
        {
            return Err(ServiceError::conflict(
                "Retail product price for this date already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let price = self.repository.create(req).await?;
        Ok(ApiResponse::ok(
            "Retail product price created successfully",
            price,
        ))
    }

    async fn update_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdatePriceRequest,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError> {
        Self::check_interval(key.2, req.date_to)?;
        Self::check_price(req.price)?;

        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product price not found"))?;

        let price = self.repository.update(key, req).await?;
        Ok(ApiResponse::ok(
            "Retail product price updated successfully",
            price,
        ))
    }

    async fn delete_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(key).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Retail product price not found"));
        }
        Ok(ApiResponse::message(
            "Retail product price deleted successfully",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            ProductRepositoryTrait, RetailProductPriceRepositoryTrait,
            RetailProductRepositoryTrait, RetailRepositoryTrait,
        },
        domain::requests::{
            CreateProductRequest, CreateRetailProductRequest, CreateRetailRequest,
            UpdateProductRequest, UpdateRetailRequest,
        },
        model::{Product, Retail, RetailProduct},
    };
    use chrono::TimeZone;
    use shared::errors::RepositoryError;
    use std::sync::{Arc, Mutex};

    struct FakeRetailRepository {
        ids: Vec<i32>,
    }

    #[async_trait]
    impl RetailRepositoryTrait for FakeRetailRepository {
        async fn find_all(&self) -> Result<Vec<Retail>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Retail>, RepositoryError> {
            Ok(self.ids.contains(&id).then(|| Retail {
                retail_id: id,
                retail_name: format!("retail-{id}"),
            }))
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Retail>, RepositoryError> {
            Ok(None)
        }

        async fn create(&self, _req: &CreateRetailRequest) -> Result<Retail, RepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: i32,
            _req: &UpdateRetailRequest,
        ) -> Result<Retail, RepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i32) -> Result<u64, RepositoryError> {
            unimplemented!()
        }
    }

    struct FakeProductRepository {
        ids: Vec<i32>,
    }

    #[async_trait]
    impl ProductRepositoryTrait for FakeProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.ids.contains(&id).then(|| Product {
                product_id: id,
                sub_category_id: 1,
                product_sku: format!("SKU-{id}"),
                product_name: format!("product-{id}"),
                product_code_bar: None,
                product_image: None,
            }))
        }

        async fn find_by_sub_category(
            &self,
            _sub_category_id: i32,
        ) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_sku(&self, _sku: &str) -> Result<Option<Product>, RepositoryError> {
            Ok(None)
        }

        async fn create(&self, _req: &CreateProductRequest) -> Result<Product, RepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: i32,
            _req: &UpdateProductRequest,
        ) -> Result<Product, RepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i32) -> Result<u64, RepositoryError> {
            unimplemented!()
        }
    }

    struct FakeRetailProductRepository {
        pairs: Vec<(i32, i32)>,
    }

    #[async_trait]
    impl RetailProductRepositoryTrait for FakeRetailProductRepository {
        async fn find_all(&self) -> Result<Vec<RetailProduct>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_key(
            &self,
            key: (i32, i32),
        ) -> Result<Option<RetailProduct>, RepositoryError> {
            Ok(self.pairs.contains(&key).then(|| RetailProduct {
                retail_id: key.0,
                product_id: key.1,
            }))
        }

        async fn find_by_retail(
            &self,
            _retail_id: i32,
        ) -> Result<Vec<RetailProduct>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_product(
            &self,
            _product_id: i32,
        ) -> Result<Vec<RetailProduct>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(
            &self,
            _req: &CreateRetailProductRequest,
        ) -> Result<RetailProduct, RepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _key: (i32, i32)) -> Result<u64, RepositoryError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct InMemoryPriceRepository {
        rows: Mutex<Vec<RetailProductPrice>>,
    }

    #[async_trait]
    impl RetailProductPriceRepositoryTrait for InMemoryPriceRepository {
        async fn find_all(&self) -> Result<Vec<RetailProductPrice>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_key(
            &self,
            key: (i32, i32, DateTime<Utc>),
        ) -> Result<Option<RetailProductPrice>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| (p.retail_id, p.product_id, p.date_from) == key)
                .cloned())
        }

        async fn find_by_retail(
            &self,
            retail_id: i32,
        ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.retail_id == retail_id)
                .cloned()
                .collect())
        }

        async fn find_by_product(
            &self,
            product_id: i32,
        ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn find_by_pair(
            &self,
            retail_id: i32,
            product_id: i32,
        ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.retail_id == retail_id && p.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn find_current(
            &self,
            retail_id: i32,
            product_id: i32,
            as_of: DateTime<Utc>,
        ) -> Result<Option<RetailProductPrice>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            let mut candidates: Vec<_> = rows
                .iter()
                .filter(|p| {
                    p.retail_id == retail_id
                        && p.product_id == product_id
                        && p.date_from <= as_of
                        && p.date_to.is_none_or(|to| to >= as_of)
                })
                .cloned()
                .collect();
            candidates.sort_by_key(|p| p.date_from);
            Ok(candidates.pop())
        }

        async fn create(
            &self,
            req: &CreatePriceRequest,
        ) -> Result<RetailProductPrice, RepositoryError> {
            let price = RetailProductPrice {
                retail_id: req.retail_id,
                product_id: req.product_id,
                date_from: req.date_from,
                price: req.price,
                date_to: req.date_to,
            };
            self.rows.lock().unwrap().push(price.clone());
            Ok(price)
        }

        async fn update(
            &self,
            key: (i32, i32, DateTime<Utc>),
            req: &UpdatePriceRequest,
        ) -> Result<RetailProductPrice, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let price = rows
                .iter_mut()
                .find(|p| (p.retail_id, p.product_id, p.date_from) == key)
                .ok_or(RepositoryError::NotFound)?;
            price.price = req.price;
            price.date_to = req.date_to;
            Ok(price.clone())
        }

        async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| (p.retail_id, p.product_id, p.date_from) != key);
            Ok((before - rows.len()) as u64)
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn service() -> RetailProductPriceService {
        RetailProductPriceService::new(
            Arc::new(InMemoryPriceRepository::default()),
            Arc::new(FakeRetailRepository { ids: vec![1] }),
            Arc::new(FakeProductRepository { ids: vec![10] }),
            Arc::new(FakeRetailProductRepository {
                pairs: vec![(1, 10)],
            }),
        )
    }

    fn create_req(date_from: DateTime<Utc>, date_to: Option<DateTime<Utc>>) -> CreatePriceRequest {
        CreatePriceRequest {
            retail_id: 1,
            product_id: 10,
            price: Decimal::new(199, 2),
            date_from,
            date_to,
        }
    }

    #[tokio::test]
    async fn create_rejects_inverted_intervals() {
        let svc = service();
        let err = svc
            .create_price(&create_req(at(2026, 2, 1), Some(at(2026, 1, 1))))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_negative_prices() {
        let svc = service();
        let mut req = create_req(at(2026, 1, 1), None);
        req.price = Decimal::new(-1, 0);
        let err = svc.create_price(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_requires_the_pair_to_exist() {
        let svc = service();
        let mut req = create_req(at(2026, 1, 1), None);
        req.retail_id = 99;
        let err = svc.create_price(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Retail not found"));

        let mut req = create_req(at(2026, 1, 1), None);
        req.product_id = 99;
        let err = svc.create_price(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Product not found"));
    }

    #[tokio::test]
    async fn duplicate_start_date_is_a_conflict_carrying_the_existing_row() {
        let svc = service();
        svc.create_price(&create_req(at(2026, 1, 1), None))
            .await
            .unwrap();

        let err = svc
            .create_price(&create_req(at(2026, 1, 1), None))
            .await
            .unwrap_err();

        match err {
            ServiceError::Conflict { details, .. } => {
                assert!(details.unwrap().contains("\"retailId\":1"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn current_price_prefers_the_latest_overlapping_interval() {
        let svc = service();
        svc.create_price(&create_req(at(2026, 1, 1), None))
            .await
            .unwrap();

        let mut newer = create_req(at(2026, 3, 1), None);
        newer.price = Decimal::new(299, 2);
        svc.create_price(&newer).await.unwrap();

        let res = svc
            .get_current_price(1, 10, at(2026, 4, 1))
            .await
            .unwrap();
        assert_eq!(res.data.unwrap().price, Decimal::new(299, 2));
    }

    #[tokio::test]
    async fn disjoint_intervals_resolve_to_the_covering_record() {
        let svc = service();

        let mut first = create_req(at(2024, 1, 1), Some(at(2024, 5, 31)));
        first.price = Decimal::new(10, 0);
        svc.create_price(&first).await.unwrap();

        let mut second = create_req(at(2024, 6, 1), None);
        second.price = Decimal::new(12, 0);
        svc.create_price(&second).await.unwrap();

        let res = svc.get_current_price(1, 10, at(2024, 3, 1)).await.unwrap();
        assert_eq!(res.data.unwrap().price, Decimal::new(10, 0));

        let res = svc.get_current_price(1, 10, at(2024, 7, 1)).await.unwrap();
        assert_eq!(res.data.unwrap().price, Decimal::new(12, 0));
    }

    #[tokio::test]
    async fn no_covering_interval_means_not_found() {
        let svc = service();
        svc.create_price(&create_req(at(2026, 2, 1), Some(at(2026, 3, 1))))
            .await
            .unwrap();

        let err = svc
            .get_current_price(1, 10, at(2026, 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_and_delete_address_the_exact_composite_key() {
        let svc = service();
        svc.create_price(&create_req(at(2026, 1, 1), None))
            .await
            .unwrap();

        let res = svc
            .update_price(
                (1, 10, at(2026, 1, 1)),
                &UpdatePriceRequest {
                    price: Decimal::new(500, 2),
                    date_to: Some(at(2026, 6, 1)),
                },
            )
            .await
            .unwrap();
        assert_eq!(res.data.unwrap().price, Decimal::new(500, 2));

        svc.delete_price((1, 10, at(2026, 1, 1))).await.unwrap();
        let err = svc
            .delete_price((1, 10, at(2026, 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
