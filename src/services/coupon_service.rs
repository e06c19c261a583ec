// src/services/coupon_service.rs

use crate::{common::error::AppError, db::CouponRepository, models::coupon::Coupon};

// Resultado da validação de um código de cupom
#[derive(Debug, PartialEq, Eq)]
pub enum CouponValidation {
    NotFound,
    NotAvailable,
    Valid { discount: i32 },
}

#[derive(Clone)]
pub struct CouponService {
    repo: CouponRepository,
}

impl CouponService {
    pub fn new(repo: CouponRepository) -> Self {
        Self { repo }
    }

    pub async fn validate(&self, coupon_code: &str) -> Result<CouponValidation, AppError> {
        let coupon = self.repo.find_by_code(coupon_code).await?;
        Ok(Self::decide(coupon))
    }

    // Decisão pura, separada da consulta para poder testar sem banco
    fn decide(coupon: Option<Coupon>) -> CouponValidation {
        match coupon {
            None => CouponValidation::NotFound,
            Some(c) if !c.available => CouponValidation::NotAvailable,
            Some(c) => CouponValidation::Valid {
                discount: c.discount,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn coupon(available: bool, discount: i32) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            coupon_code: "NOVO10".into(),
            discount,
            description: "Desconto de boas-vindas".into(),
            available,
        }
    }

    #[test]
    fn codigo_inexistente_nao_e_encontrado() {
        assert_eq!(CouponService::decide(None), CouponValidation::NotFound);
    }

    #[test]
    fn cupom_desativado_e_indisponivel() {
        assert_eq!(
            CouponService::decide(Some(coupon(false, 10))),
            CouponValidation::NotAvailable
        );
    }

    #[test]
    fn cupom_valido_devolve_o_desconto_armazenado() {
        assert_eq!(
            CouponService::decide(Some(coupon(true, 15))),
            CouponValidation::Valid { discount: 15 }
        );
    }
}
