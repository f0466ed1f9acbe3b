// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Collateral loans pallet benchmarking.

use super::*;
use crate::Pallet as CollateralLoans;
use frame_benchmarking::{v2::*, whitelisted_caller, BenchmarkError};
use frame_support::{
	assert_ok,
	traits::{
		fungibles::{approvals::Mutate as FungiblesApprovals, Create, Inspect, Mutate},
		EnsureOrigin, Get,
	},
};
use frame_system::RawOrigin;
use sp_runtime::traits::One;

const DEPOSIT: u32 = 1_000;

/// Create the collateral and liability assets if absent and whitelist the benchmark
/// collateral and template.
fn setup_policy<T: Config>() -> (T::AssetId, T::TemplateId)
where
	T::Assets: Create<T::AccountId> + Mutate<T::AccountId>,
{
	let admin: T::AccountId = whitelisted_caller();
	let collateral = T::BenchmarkHelper::collateral_asset();
	let template = T::BenchmarkHelper::template();
	let liability = T::LiabilityAssetId::get();

	if !T::Assets::asset_exists(collateral) {
		assert_ok!(T::Assets::create(collateral, admin.clone(), true, One::one()));
	}
	if !T::Assets::asset_exists(liability) {
		assert_ok!(T::Assets::create(liability, admin, true, One::one()));
	}

	AllowedCollateral::<T>::insert(collateral, ());
	AllowedLoanTemplates::<T>::insert(template, ());

	(collateral, template)
}

/// Fund `who` with collateral and approve the pallet to pull `amount` of `asset`.
fn fund_and_approve<T: Config>(who: &T::AccountId, asset: T::AssetId, amount: BalanceOf<T>)
where
	T::Assets: Create<T::AccountId> + Mutate<T::AccountId>,
{
	T::BenchmarkHelper::fund_account(who);
	assert_ok!(T::Assets::mint_into(asset, who, amount));
	assert_ok!(T::Assets::approve(asset, who, &CollateralLoans::<T>::account_id(), amount));
}

/// Open a loan of `DEPOSIT` collateral for `who` and return its id.
fn setup_loan<T: Config>(who: &T::AccountId) -> LoanId
where
	T::Assets: Create<T::AccountId> + Mutate<T::AccountId>,
{
	let (collateral, template) = setup_policy::<T>();
	fund_and_approve::<T>(who, collateral, DEPOSIT.into());
	let loan_id = NextLoanId::<T>::get();
	assert_ok!(CollateralLoans::<T>::create_loan(
		RawOrigin::Signed(who.clone()).into(),
		collateral,
		template,
		DEPOSIT.into(),
	));
	loan_id
}

#[benchmarks(where T::Assets: Create<T::AccountId> + Mutate<T::AccountId>)]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn create_loan() {
		let caller: T::AccountId = whitelisted_caller();
		let (collateral, template) = setup_policy::<T>();
		fund_and_approve::<T>(&caller, collateral, DEPOSIT.into());
		let loan_id = NextLoanId::<T>::get();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), collateral, template, DEPOSIT.into());

		assert_eq!(
			Loans::<T>::get(loan_id).map(|loan| loan.debt),
			Some(BalanceOf::<T>::from(DEPOSIT))
		);
		assert_eq!(T::Assets::balance(T::LiabilityAssetId::get(), &caller), DEPOSIT.into());
	}

	#[benchmark]
	fn repay_loan() {
		let caller: T::AccountId = whitelisted_caller();
		let loan_id = setup_loan::<T>(&caller);
		assert_ok!(T::Assets::approve(
			T::LiabilityAssetId::get(),
			&caller,
			&CollateralLoans::<T>::account_id(),
			DEPOSIT.into(),
		));

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), loan_id, BalanceOf::<T>::from(DEPOSIT / 2));

		assert_eq!(
			Loans::<T>::get(loan_id).map(|loan| loan.debt),
			Some(BalanceOf::<T>::from(DEPOSIT / 2))
		);
	}

	#[benchmark]
	fn withdraw_collateral() {
		let caller: T::AccountId = whitelisted_caller();
		let loan_id = setup_loan::<T>(&caller);
		let collateral = T::BenchmarkHelper::collateral_asset();
		// Top the loan account up so there is surplus to release.
		assert_ok!(T::Assets::mint_into(
			collateral,
			&CollateralLoans::<T>::loan_account_id(loan_id),
			DEPOSIT.into(),
		));

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), loan_id, BalanceOf::<T>::from(DEPOSIT));

		assert_eq!(T::Assets::balance(collateral, &caller), DEPOSIT.into());
	}

	#[benchmark]
	fn apply_yield() {
		let caller: T::AccountId = whitelisted_caller();
		let loan_id = setup_loan::<T>(&caller);
		let collateral = T::BenchmarkHelper::collateral_asset();
		assert_ok!(T::Assets::mint_into(
			collateral,
			&CollateralLoans::<T>::loan_account_id(loan_id),
			BalanceOf::<T>::from(DEPOSIT / 2),
		));

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), loan_id, BalanceOf::<T>::from(DEPOSIT / 2));

		assert_eq!(
			Loans::<T>::get(loan_id).map(|loan| loan.debt),
			Some(BalanceOf::<T>::from(DEPOSIT / 2))
		);
		assert_eq!(T::Assets::balance(collateral, &T::Treasury::get()), (DEPOSIT / 2).into());
	}

	#[benchmark]
	fn set_allowed_collateral() -> Result<(), BenchmarkError> {
		let origin =
			T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
		let asset = T::BenchmarkHelper::collateral_asset();

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, asset, true);

		assert!(AllowedCollateral::<T>::contains_key(asset));
		Ok(())
	}

	#[benchmark]
	fn set_allowed_loan_template() -> Result<(), BenchmarkError> {
		let origin =
			T::ManagerOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
		let template = T::BenchmarkHelper::template();

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, template, true);

		assert!(AllowedLoanTemplates::<T>::contains_key(template));
		Ok(())
	}

	impl_benchmark_test_suite!(CollateralLoans, crate::mock::new_test_ext(), crate::mock::Test);
}
