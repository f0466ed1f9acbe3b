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

//! Test environment for the collateral loans pallet.

use frame_support::{
	construct_runtime, derive_impl, ord_parameter_types, parameter_types,
	traits::{AsEnsureOriginWithArg, ConstU128},
	PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned, EnsureSignedBy};
use sp_io::TestExternalities as TestState;
use sp_runtime::{traits::IdentityLookup, BuildStorage};

// Test accounts
pub const ALICE: u128 = 1;
pub const BOB: u128 = 2;
pub const CHARLIE: u128 = 3;
/// The registry owner. The only origin allowed to touch the whitelists.
pub const OWNER: u128 = 10;
/// Protocol account receiving applied yield.
pub const TREASURY: u128 = 200;

/// The liability unit minted against collateral.
pub const LIABILITY_ASSET: u32 = 1;
/// Whitelisted at genesis.
pub const COLLATERAL_ASSET: u32 = 2;
/// Exists on the ledger but is not whitelisted.
pub const OTHER_ASSET: u32 = 3;

/// Whitelisted at genesis.
pub const STANDARD_TEMPLATE: u32 = 1;
/// Not whitelisted.
pub const OTHER_TEMPLATE: u32 = 2;

pub const INITIAL_COLLATERAL: u128 = 1_000;

// Configure a mock runtime to test the pallet.
construct_runtime!(
	pub enum Test {
		System: frame_system,
		Balances: pallet_balances,
		Assets: pallet_assets,
		CollateralLoans: crate,
	}
);

type Block = frame_system::mocking::MockBlock<Test>;

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
	type AccountId = u128; // u64 is not enough to hold bytes used to generate loan sub-accounts
	type Lookup = IdentityLookup<Self::AccountId>;
	type AccountData = pallet_balances::AccountData<u128>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
	type Balance = u128;
	type ExistentialDeposit = ConstU128<1>;
	type AccountStore = System;
}

#[derive_impl(pallet_assets::config_preludes::TestDefaultConfig)]
impl pallet_assets::Config for Test {
	type Balance = u128;
	type AssetId = u32;
	type AssetIdParameter = u32;
	type Currency = Balances;
	type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<u128>>;
	type ForceOrigin = EnsureRoot<u128>;
}

parameter_types! {
	pub const LiabilityAssetId: u32 = LIABILITY_ASSET;
	pub const TreasuryAccount: u128 = TREASURY;
	pub const LoansPalletId: PalletId = PalletId(*b"py/cloan");
}

ord_parameter_types! {
	pub const RegistryOwner: u128 = OWNER;
}

impl crate::Config for Test {
	type Assets = Assets;
	type AssetId = u32;
	type TemplateId = u32;
	type ManagerOrigin = EnsureSignedBy<RegistryOwner, u128>;
	type WeightInfo = ();
	#[cfg(feature = "runtime-benchmarks")]
	type BenchmarkHelper = LoansBenchmarkHelper;
	type LiabilityAssetId = LiabilityAssetId;
	type Treasury = TreasuryAccount;
	type PalletId = LoansPalletId;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct LoansBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u128, u32, u32> for LoansBenchmarkHelper {
	fn collateral_asset() -> u32 {
		COLLATERAL_ASSET
	}

	fn template() -> u32 {
		STANDARD_TEMPLATE
	}

	fn fund_account(who: &u128) {
		use frame_support::traits::fungible::Mutate;
		<Balances as Mutate<u128>>::set_balance(who, 1_000);
	}
}

/// Build genesis storage with default configuration.
///
/// Both assets are sufficient with a minimum balance of 1 so that loan accounts and the
/// treasury can be created by plain transfers. Users carry a little native balance to cover
/// the asset ledger's approval deposits.
pub fn new_test_ext() -> TestState {
	let mut storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

	pallet_balances::GenesisConfig::<Test> {
		balances: vec![(ALICE, 100), (BOB, 100), (CHARLIE, 100), (OWNER, 100)],
		..Default::default()
	}
	.assimilate_storage(&mut storage)
	.unwrap();

	pallet_assets::GenesisConfig::<Test> {
		assets: vec![
			// (asset_id, owner, is_sufficient, min_balance)
			(LIABILITY_ASSET, OWNER, true, 1),
			(COLLATERAL_ASSET, OWNER, true, 1),
			(OTHER_ASSET, OWNER, true, 1),
		],
		metadata: vec![
			// (asset_id, name, symbol, decimals)
			(LIABILITY_ASSET, b"Loan Unit".to_vec(), b"LOAN".to_vec(), 10),
			(COLLATERAL_ASSET, b"Staked Collateral".to_vec(), b"SCOL".to_vec(), 10),
		],
		accounts: vec![
			(COLLATERAL_ASSET, ALICE, INITIAL_COLLATERAL),
			(COLLATERAL_ASSET, BOB, INITIAL_COLLATERAL),
			(OTHER_ASSET, ALICE, INITIAL_COLLATERAL),
		],
		..Default::default()
	}
	.assimilate_storage(&mut storage)
	.unwrap();

	crate::GenesisConfig::<Test> {
		allowed_collateral: vec![COLLATERAL_ASSET],
		allowed_templates: vec![STANDARD_TEMPLATE],
	}
	.assimilate_storage(&mut storage)
	.unwrap();

	let mut ext: TestState = storage.into();
	ext.execute_with(|| System::set_block_number(1));
	ext
}
