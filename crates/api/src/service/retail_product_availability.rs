use crate::{
    abstract_trait::{
        DynProductRepository, DynRetailProductAvailabilityRepository,
        DynRetailProductRepository, DynRetailRepository,
        RetailProductAvailabilityServiceTrait,
    },
    domain::{
        requests::{CreateAvailabilityRequest, UpdateAvailabilityRequest},
        response::ApiResponse,
    },
    model::RetailProductAvailability,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::ServiceError;

pub struct RetailProductAvailabilityService {
    repository: DynRetailProductAvailabilityRepository,
    retail_repository: DynRetailRepository,
    product_repository: DynProductRepository,
    retail_product_repository: DynRetailProductRepository,
}

impl RetailProductAvailabilityService {
    pub fn new(
        repository: DynRetailProductAvailabilityRepository,
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
}

#[async_trait]
impl RetailProductAvailabilityServiceTrait for RetailProductAvailabilityService {
    async fn get_availabilities(
        &self,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError> {
        let availabilities = self.repository.find_all().await?;
        if availabilities.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product availabilities found",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product availabilities retrieved successfully",
            availabilities,
        ))
    }

    async fn get_availabilities_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError> {
        let availabilities = self.repository.find_by_retail(retail_id).await?;
        if availabilities.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product availabilities found for this retail",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product availabilities retrieved successfully",
            availabilities,
        ))
    }

    async fn get_availabilities_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError> {
        let availabilities = self.repository.find_by_product(product_id).await?;
        if availabilities.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product availabilities found for this product",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product availabilities retrieved successfully",
            availabilities,
        ))
    }

    async fn get_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError> {
        let availability = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product availability not found"))?;
        Ok(ApiResponse::ok(
            "Retail product availability retrieved successfully",
            availability,
        ))
    }

    async fn get_availabilities_of_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError> {
        let availabilities = self.repository.find_by_pair(retail_id, product_id).await?;
        if availabilities.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product availabilities found for this retail product",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product availabilities retrieved successfully",
            availabilities,
        ))
    }

    async fn get_current_availability(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError> {
        let availability = self
            .repository
            .find_current(retail_id, product_id, as_of)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("No current availability found for this retail product")
            })?;
        Ok(ApiResponse::ok(
            "Current retail product availability retrieved successfully",
            availability,
        ))
    }

    async fn get_availabilities_in_range(
        &self,
        retail_id: i32,
        product_id: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError> {
        if start_date >= end_date {
            return Err(ServiceError::validation("endDate must be after startDate"));
        }

        let availabilities = self
            .repository
            .find_in_range(retail_id, product_id, start_date, end_date)
            .await?;
        if availabilities.is_empty() {
            return Err(ServiceError::not_found(
                "No retail product availabilities found in the given range",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail product availabilities retrieved successfully",
            availabilities,
        ))
    }

    async fn create_availability(
        &self,
        req: &CreateAvailabilityRequest,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError> {
        Self::check_interval(req.date_from, req.date_to)?;
        self.ensure_pair_exists(req.retail_id, req.product_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_key((req.retail_id, req.product_id, req.date_from))
            .await?
        {
            return Err(ServiceError::conflict(
                "Retail product availability for this date already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let availability = self.repository.create(req).await?;
        Ok(ApiResponse::ok(
            "Retail product availability created successfully",
            availability,
        ))
    }

    async fn update_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdateAvailabilityRequest,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError> {
        Self::check_interval(key.2, req.date_to)?;

        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product availability not found"))?;

        let availability = self.repository.update(key, req).await?;
        Ok(ApiResponse::ok(
            "Retail product availability updated successfully",
            availability,
        ))
    }

    async fn delete_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(key).await?;
        if affected == 0 {
            return Err(ServiceError::not_found(
                "Retail product availability not found",
            ));
        }
        Ok(ApiResponse::message(
            "Retail product availability deleted successfully",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            ProductRepositoryTrait, RetailProductAvailabilityRepositoryTrait,
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

    struct FakeRetailRepository;

    #[async_trait]
    impl RetailRepositoryTrait for FakeRetailRepository {
        async fn find_all(&self) -> Result<Vec<Retail>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Retail>, RepositoryError> {
            Ok((id == 1).then(|| Retail {
                retail_id: 1,
                retail_name: "retail".into(),
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

    struct FakeProductRepository;

    #[async_trait]
    impl ProductRepositoryTrait for FakeProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok((id == 10).then(|| Product {
                product_id: 10,
                sub_category_id: 1,
                product_sku: "SKU-10".into(),
                product_name: "product".into(),
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

    struct FakeRetailProductRepository;

    #[async_trait]
    impl RetailProductRepositoryTrait for FakeRetailProductRepository {
        async fn find_all(&self) -> Result<Vec<RetailProduct>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_key(
            &self,
            key: (i32, i32),
        ) -> Result<Option<RetailProduct>, RepositoryError> {
            Ok((key == (1, 10)).then(|| RetailProduct {
                retail_id: 1,
                product_id: 10,
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
    struct InMemoryAvailabilityRepository {
        rows: Mutex<Vec<RetailProductAvailability>>,
    }

    #[async_trait]
    impl RetailProductAvailabilityRepositoryTrait for InMemoryAvailabilityRepository {
        async fn find_all(&self) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_key(
            &self,
            key: (i32, i32, DateTime<Utc>),
        ) -> Result<Option<RetailProductAvailability>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| (a.retail_id, a.product_id, a.date_from) == key)
                .cloned())
        }

        async fn find_by_retail(
            &self,
            retail_id: i32,
        ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.retail_id == retail_id)
                .cloned()
                .collect())
        }

        async fn find_by_product(
            &self,
            product_id: i32,
        ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn find_by_pair(
            &self,
            retail_id: i32,
            product_id: i32,
        ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.retail_id == retail_id && a.product_id == product_id)
                .cloned()
                .collect())
        }

        async fn find_current(
            &self,
            retail_id: i32,
            product_id: i32,
            as_of: DateTime<Utc>,
        ) -> Result<Option<RetailProductAvailability>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            let mut candidates: Vec<_> = rows
                .iter()
                .filter(|a| {
                    a.retail_id == retail_id
                        && a.product_id == product_id
                        && a.date_from <= as_of
                        && a.date_to.is_none_or(|to| to >= as_of)
                })
                .cloned()
                .collect();
            candidates.sort_by_key(|a| a.date_from);
            Ok(candidates.pop())
        }

        async fn find_in_range(
            &self,
            retail_id: i32,
            product_id: i32,
            start_date: DateTime<Utc>,
            end_date: DateTime<Utc>,
        ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| {
                    a.retail_id == retail_id
                        && a.product_id == product_id
                        && a.date_from <= end_date
                        && a.date_to.is_none_or(|to| to >= start_date)
                })
                .cloned()
                .collect())
        }

        async fn create(
            &self,
            req: &CreateAvailabilityRequest,
        ) -> Result<RetailProductAvailability, RepositoryError> {
            let availability = RetailProductAvailability {
                retail_id: req.retail_id,
                product_id: req.product_id,
                date_from: req.date_from,
                date_to: req.date_to,
            };
            self.rows.lock().unwrap().push(availability.clone());
            Ok(availability)
        }

        async fn update(
            &self,
            key: (i32, i32, DateTime<Utc>),
            req: &UpdateAvailabilityRequest,
        ) -> Result<RetailProductAvailability, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let availability = rows
                .iter_mut()
                .find(|a| (a.retail_id, a.product_id, a.date_from) == key)
                .ok_or(RepositoryError::NotFound)?;
            availability.date_to = req.date_to;
            Ok(availability.clone())
        }

        async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| (a.retail_id, a.product_id, a.date_from) != key);
            Ok((before - rows.len()) as u64)
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn service() -> RetailProductAvailabilityService {
        RetailProductAvailabilityService::new(
            Arc::new(InMemoryAvailabilityRepository::default()),
            Arc::new(FakeRetailRepository),
            Arc::new(FakeProductRepository),
            Arc::new(FakeRetailProductRepository),
        )
    }

    fn create_req(
        date_from: DateTime<Utc>,
        date_to: Option<DateTime<Utc>>,
    ) -> CreateAvailabilityRequest {
        CreateAvailabilityRequest {
            retail_id: 1,
            product_id: 10,
            date_from,
            date_to,
        }
    }

    #[tokio::test]
    async fn create_requires_the_association() {
        let svc = service();
        let mut req = create_req(at(2026, 1, 1), None);
        req.product_id = 10;
        req.retail_id = 1;
        svc.create_availability(&req).await.unwrap();

        let mut req = create_req(at(2026, 1, 2), None);
        req.retail_id = 2;
        let err = svc.create_availability(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Retail not found"));
    }

    #[tokio::test]
    async fn range_lookup_returns_overlapping_intervals_only() {
        let svc = service();
        svc.create_availability(&create_req(at(2026, 1, 1), Some(at(2026, 1, 31))))
            .await
            .unwrap();
        svc.create_availability(&create_req(at(2026, 3, 1), None))
            .await
            .unwrap();

        let res = svc
            .get_availabilities_in_range(1, 10, at(2026, 2, 15), at(2026, 3, 15))
            .await
            .unwrap();
        let rows = res.data.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_from, at(2026, 3, 1));
    }

    #[tokio::test]
    async fn inverted_range_is_a_validation_error() {
        let svc = service();
        let err = svc
            .get_availabilities_in_range(1, 10, at(2026, 3, 1), at(2026, 2, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Equal bounds are rejected too; the end must be strictly later.
        let err = svc
            .get_availabilities_in_range(1, 10, at(2026, 3, 1), at(2026, 3, 1))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(msgs) if msgs[0] == "endDate must be after startDate")
        );
    }

    #[tokio::test]
    async fn range_without_matches_is_not_found() {
        let svc = service();
        svc.create_availability(&create_req(at(2026, 1, 1), Some(at(2026, 1, 31))))
            .await
            .unwrap();

        let err = svc
            .get_availabilities_in_range(1, 10, at(2026, 6, 1), at(2026, 6, 30))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn open_interval_counts_as_current() {
        let svc = service();
        svc.create_availability(&create_req(at(2026, 1, 1), None))
            .await
            .unwrap();

        let res = svc
            .get_current_availability(1, 10, at(2027, 1, 1))
            .await
            .unwrap();
        assert_eq!(res.data.unwrap().date_from, at(2026, 1, 1));
    }
}
