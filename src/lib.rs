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

//! # Collateral Loans Pallet
//!
//! An interest-free credit engine issuing a pegged liability unit 1:1 against deposited
//! collateral.
//!
//! ## Pallet API
//!
//! See the [`pallet`] module for more information about the interfaces this pallet exposes,
//! including its configuration trait, dispatchables, storage items, events and errors.
//!
//! ## Overview
//!
//! The pallet acts as the loan registry for the protocol. A borrower opens a loan by pulling
//! collateral into a dedicated, pallet-derived loan account and receives the same amount of the
//! liability asset, freshly minted. Debt never grows: it is only ever reduced, either by
//! repaying liability units (which are burned) or by surrendering collateral surplus to the
//! protocol treasury in place of interest.
//!
//! ### Key Concepts
//!
//! * **[`Loan`]**: A per-loan record created by [`Pallet::create_loan`]. Stores the immutable
//!   borrower, collateral asset and template, plus the outstanding `debt`. The collateral
//!   balance is never shadow-stored; it is always read from the asset ledger's balance of the
//!   loan's own account.
//!
//! * **Loan account**: A sovereign sub-account derived from [`Config::PalletId`] and the loan
//!   id. It custodies the loan's collateral, so any value the collateral accrues (e.g. a
//!   rebasing yield credited externally) shows up as withdrawable or debt-reducing surplus.
//!
//! * **Liability asset**: The fungible unit minted 1:1 against pulled collateral, identified
//!   by [`Config::LiabilityAssetId`]. The pallet mints and burns it exclusively through
//!   [`Config::Assets`]; the runtime wiring of that type is the only capability grant.
//!
//! * **Surplus**: The loan account's collateral balance in excess of `debt`. Surplus may be
//!   withdrawn by the borrower or applied to the debt via [`Pallet::apply_yield`], which
//!   forwards it to [`Config::Treasury`] as protocol revenue.
//!
//! * **Whitelists**: [`AllowedCollateral`] and [`AllowedLoanTemplates`] gate which assets and
//!   which loan behavior variants may be used for *new* loans. They are checked only at
//!   creation; revoking an entry later never invalidates existing loans.
//!
//! ### Loan Lifecycle
//!
//! 1. **Approve**: Borrower approves the pallet's account ([`Pallet::account_id`]) to pull the
//!    collateral deposit.
//! 2. **Create**: [`Pallet::create_loan`] pulls the deposit into a fresh loan account and
//!    mints the same amount of the liability asset to the borrower.
//! 3. **Repay**: [`Pallet::repay_loan`] pulls liability units from the borrower and burns
//!    them, reducing `debt`.
//! 4. **Withdraw**: [`Pallet::withdraw_collateral`] releases surplus collateral to the
//!    borrower.
//! 5. **Apply yield**: [`Pallet::apply_yield`] sends surplus collateral to the treasury and
//!    reduces `debt` by the same amount.
//!
//! A loan whose `debt` reaches zero is settled but never removed: the record and its account
//! stay addressable, remaining collateral stays withdrawable, and a later external top-up can
//! still be swept to the treasury.
//!
//! ### Invariants
//!
//! * `debt <= collateral balance` for every loan, after every committed operation.
//! * Liability units minted at creation equal the collateral pulled (1:1 peg).
//! * `debt` is non-increasing after creation.
//!
//! Dispatch is atomic: creation pulls collateral before the debt is recorded, debt reductions
//! are written before the corresponding ledger calls, and any failure rolls the whole
//! operation back, so no intermediate state is ever observable.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod weights;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


pub use pallet::*;
pub use weights::WeightInfo;

#[frame_support::pallet]
pub mod pallet {
	use crate::WeightInfo;

	use alloc::vec::Vec;
	use frame_support::{
		pallet_prelude::*,
		traits::{
			fungibles::{
				approvals::Mutate as FungiblesApprovals, Inspect as FungiblesInspect,
				Mutate as FungiblesMutate,
			},
			tokens::{Fortitude, Precision, Preservation},
		},
		DefaultNoBound, PalletId,
	};
	use frame_system::pallet_prelude::*;
	use sp_runtime::{
		traits::{AccountIdConversion, CheckedSub, Saturating, Zero},
		ArithmeticError,
	};

	/// Log target for this pallet.
	pub(crate) const LOG_TARGET: &str = "runtime::collateral-loans";

	/// Identifier for a loan. Assigned sequentially, never reused.
	pub type LoanId = u32;

	/// Unified balance type of the asset ledger, shared by every collateral asset and the
	/// liability asset.
	pub type BalanceOf<T> = <<T as Config>::Assets as FungiblesInspect<
		<T as frame_system::Config>::AccountId,
	>>::Balance;

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// The ledger holding every collateral asset and the liability asset.
		///
		/// Collateral deposits are pulled through the approval mechanism, so borrowers must
		/// approve the pallet's account ([`Pallet::account_id`]) before creating or repaying a
		/// loan. Holding this type is the pallet's only mint/burn capability on the liability
		/// asset; it is granted exclusively by the runtime wiring.
		type Assets: FungiblesInspect<Self::AccountId, AssetId = Self::AssetId>
			+ FungiblesMutate<Self::AccountId>
			+ FungiblesApprovals<Self::AccountId>;

		/// The `AssetId` type of the asset ledger.
		type AssetId: Parameter + Member + Copy + MaybeSerializeDeserialize + MaxEncodedLen;

		/// Identity of a loan behavior variant.
		///
		/// New variants are introduced by whitelisting a fresh identity; loans already created
		/// under an older variant are untouched. The pallet treats the identity as opaque.
		type TemplateId: Parameter + Member + Copy + MaybeSerializeDeserialize + MaxEncodedLen;

		/// Origin allowed to update the collateral and template whitelists.
		type ManagerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// A type representing the weights required by the dispatchables of this pallet.
		type WeightInfo: WeightInfo;

		/// Helper type for benchmarking.
		#[cfg(feature = "runtime-benchmarks")]
		type BenchmarkHelper: BenchmarkHelper<Self::AccountId, Self::AssetId, Self::TemplateId>;

		/// The asset minted 1:1 against pulled collateral.
		#[pallet::constant]
		type LiabilityAssetId: Get<Self::AssetId>;

		/// Account receiving collateral surplus applied via [`Pallet::apply_yield`].
		#[pallet::constant]
		type Treasury: Get<Self::AccountId>;

		/// The pallet id. Source of the pallet's own account and of every loan account.
		#[pallet::constant]
		type PalletId: Get<PalletId>;
	}

	/// The in-code storage version.
	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	/// Helper trait for benchmarking setup.
	///
	/// Supplies asset and template identities the benchmarks may create and whitelist freely,
	/// and funds accounts with whatever native balance the asset ledger's approval deposits
	/// require.
	#[cfg(feature = "runtime-benchmarks")]
	pub trait BenchmarkHelper<AccountId, AssetId, TemplateId> {
		/// An asset id usable as benchmark collateral. Created by the benchmark if absent.
		fn collateral_asset() -> AssetId;

		/// A template id to whitelist for benchmark loans.
		fn template() -> TemplateId;

		/// Give `who` enough native balance to place ledger approvals.
		fn fund_account(who: &AccountId);
	}

	/// A single borrower position.
	#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Debug)]
	#[scale_info(skip_type_params(T))]
	pub struct Loan<T: Config> {
		/// The account that created the loan. Only it may operate on the position.
		pub borrower: T::AccountId,
		/// The collateral asset the loan was opened with.
		pub collateral_asset: T::AssetId,
		/// The behavior variant the loan was created under.
		pub template: T::TemplateId,
		/// Outstanding liability units. Non-increasing after creation.
		pub debt: BalanceOf<T>,
	}

	impl<T: Config> Loan<T> {
		/// The loan account's collateral balance, read from the asset ledger.
		pub(crate) fn collateral(&self, id: LoanId) -> BalanceOf<T> {
			T::Assets::balance(self.collateral_asset, &Pallet::<T>::loan_account_id(id))
		}

		/// Collateral held beyond what backs the outstanding debt.
		///
		/// Zero whenever the ledger balance does not exceed `debt`.
		pub(crate) fn surplus(&self, id: LoanId) -> BalanceOf<T> {
			self.collateral(id).saturating_sub(self.debt)
		}
	}

	/// Map of `LoanId` -> [`Loan`]. Entries are never removed.
	#[pallet::storage]
	pub type Loans<T: Config> = StorageMap<_, Blake2_128Concat, LoanId, Loan<T>>;

	/// The id the next created loan will be assigned.
	#[pallet::storage]
	pub type NextLoanId<T: Config> = StorageValue<_, LoanId, ValueQuery>;

	/// Assets accepted as collateral for new loans.
	#[pallet::storage]
	pub type AllowedCollateral<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, ()>;

	/// Templates new loans may be created under.
	#[pallet::storage]
	pub type AllowedLoanTemplates<T: Config> = StorageMap<_, Blake2_128Concat, T::TemplateId, ()>;

	/// Genesis configuration: the bootstrap whitelists.
	#[pallet::genesis_config]
	#[derive(DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// Collateral assets allowed from the start.
		pub allowed_collateral: Vec<T::AssetId>,
		/// Loan templates allowed from the start.
		pub allowed_templates: Vec<T::TemplateId>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			for asset in &self.allowed_collateral {
				AllowedCollateral::<T>::insert(asset, ());
			}
			for template in &self.allowed_templates {
				AllowedLoanTemplates::<T>::insert(template, ());
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A new loan was created.
		LoanCreated {
			/// The account that opened the loan and received the minted units.
			borrower: T::AccountId,
			/// Identifier of the new loan.
			loan_id: LoanId,
			/// The loan account now custodying the collateral.
			account: T::AccountId,
			/// The collateral asset pulled.
			collateral_asset: T::AssetId,
			/// The template the loan was created under.
			template: T::TemplateId,
			/// Collateral pulled, equal to the liability units minted.
			amount: BalanceOf<T>,
		},
		/// Liability units were repaid and burned.
		Repaid { loan_id: LoanId, amount: BalanceOf<T> },
		/// Surplus collateral was released to the borrower.
		CollateralWithdrawn { loan_id: LoanId, amount: BalanceOf<T> },
		/// Surplus collateral was sent to the treasury and the debt reduced in kind.
		YieldApplied { loan_id: LoanId, amount: BalanceOf<T> },
		/// A collateral asset's whitelist membership was updated by the manager.
		CollateralUpdated { asset: T::AssetId, allowed: bool },
		/// A loan template's whitelist membership was updated by the manager.
		LoanTemplateUpdated { template: T::TemplateId, allowed: bool },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// No loan exists under the specified id.
		UnknownLoan,
		/// The caller is not the loan's borrower.
		Unauthorized,
		/// The collateral asset is not whitelisted for new loans.
		InvalidCollateral,
		/// The loan template is not whitelisted for new loans.
		InvalidTemplate,
		/// Operation amounts must be greater than zero.
		ZeroAmount,
		/// Repayment exceeds the outstanding debt.
		ExcessiveRepayment,
		/// The requested amount exceeds the loan's collateral surplus.
		InsufficientSurplus,
		/// Arithmetic operation overflowed.
		ArithmeticOverflow,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Create a new loan: pull collateral, mint the same amount of the liability asset.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the borrower.
		///
		/// ## Details
		///
		/// Pulls `amount` of `collateral_asset` from the caller into a freshly derived loan
		/// account and mints `amount` liability units to the caller, recording a debt of the
		/// same size. The caller must have approved at least `amount` of `collateral_asset`
		/// to the pallet's account ([`Pallet::account_id`]) beforehand; a missing or
		/// insufficient approval surfaces as the asset ledger's unapproved-transfer error.
		/// Both the collateral asset and the template must be whitelisted at call time.
		///
		/// ## Errors
		///
		/// - [`Error::InvalidCollateral`]: If `collateral_asset` is not whitelisted.
		/// - [`Error::InvalidTemplate`]: If `template` is not whitelisted.
		/// - [`Error::ZeroAmount`]: If `amount` is zero.
		///
		/// ## Events
		///
		/// - [`Event::LoanCreated`]: Carries the new loan id and loan account.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_loan())]
		pub fn create_loan(
			origin: OriginFor<T>,
			collateral_asset: T::AssetId,
			template: T::TemplateId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;

			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
			ensure!(
				AllowedCollateral::<T>::contains_key(collateral_asset),
				Error::<T>::InvalidCollateral
			);
			ensure!(
				AllowedLoanTemplates::<T>::contains_key(template),
				Error::<T>::InvalidTemplate
			);

			let loan_id = NextLoanId::<T>::get();
			let next_id = loan_id.checked_add(1).ok_or(Error::<T>::ArithmeticOverflow)?;
			let account = Self::loan_account_id(loan_id);

			// Pull the collateral before the debt is recorded, so the position is backed from
			// the first moment it exists.
			T::Assets::transfer_from(
				collateral_asset,
				&who,
				&Self::account_id(),
				&account,
				amount,
			)?;
			T::Assets::mint_into(T::LiabilityAssetId::get(), &who, amount)?;

			Loans::<T>::insert(
				loan_id,
				Loan { borrower: who.clone(), collateral_asset, template, debt: amount },
			);
			NextLoanId::<T>::put(next_id);

			log::info!(
				target: LOG_TARGET,
				"Loan created: id={}, borrower={:?}, amount={:?}",
				loan_id,
				who,
				amount
			);

			Self::deposit_event(Event::LoanCreated {
				borrower: who,
				loan_id,
				account,
				collateral_asset,
				template,
				amount,
			});

			Ok(())
		}

		/// Repay part of a loan by burning liability units pulled from the borrower.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the loan's borrower.
		///
		/// ## Details
		///
		/// Pulls `amount` liability units from the caller into the loan account and burns them
		/// there, reducing the debt by the same amount. Requires a prior approval of the
		/// liability asset to the pallet's account, like the collateral pull at creation.
		///
		/// ## Errors
		///
		/// - [`Error::UnknownLoan`]: If no loan exists under `loan_id`.
		/// - [`Error::Unauthorized`]: If the caller is not the borrower.
		/// - [`Error::ZeroAmount`]: If `amount` is zero.
		/// - [`Error::ExcessiveRepayment`]: If `amount` exceeds the outstanding debt.
		///
		/// ## Events
		///
		/// - [`Event::Repaid`]: Emitted with the amount burned.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::repay_loan())]
		pub fn repay_loan(
			origin: OriginFor<T>,
			#[pallet::compact] loan_id: LoanId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;

			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			Loans::<T>::try_mutate(loan_id, |maybe_loan| -> DispatchResult {
				let loan = maybe_loan.as_mut().ok_or(Error::<T>::UnknownLoan)?;
				ensure!(loan.borrower == who, Error::<T>::Unauthorized);

				loan.debt =
					loan.debt.checked_sub(&amount).ok_or(Error::<T>::ExcessiveRepayment)?;

				let account = Self::loan_account_id(loan_id);
				let liability = T::LiabilityAssetId::get();
				T::Assets::transfer_from(liability, &who, &Self::account_id(), &account, amount)?;
				T::Assets::burn_from(
					liability,
					&account,
					amount,
					Preservation::Expendable,
					Precision::Exact,
					Fortitude::Force,
				)?;

				Self::deposit_event(Event::Repaid { loan_id, amount });
				Ok(())
			})
		}

		/// Withdraw unencumbered collateral from a loan.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the loan's borrower.
		///
		/// ## Details
		///
		/// Releases `amount` collateral from the loan account to the borrower. Only the
		/// surplus (the loan account's collateral balance minus the outstanding debt) is
		/// withdrawable, so the collateralization invariant holds afterwards by construction.
		///
		/// ## Errors
		///
		/// - [`Error::UnknownLoan`]: If no loan exists under `loan_id`.
		/// - [`Error::Unauthorized`]: If the caller is not the borrower.
		/// - [`Error::ZeroAmount`]: If `amount` is zero.
		/// - [`Error::InsufficientSurplus`]: If `amount` exceeds the surplus.
		///
		/// ## Events
		///
		/// - [`Event::CollateralWithdrawn`]: Emitted with the amount released.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::withdraw_collateral())]
		pub fn withdraw_collateral(
			origin: OriginFor<T>,
			#[pallet::compact] loan_id: LoanId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;

			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			let loan = Loans::<T>::get(loan_id).ok_or(Error::<T>::UnknownLoan)?;
			ensure!(loan.borrower == who, Error::<T>::Unauthorized);
			ensure!(amount <= loan.surplus(loan_id), Error::<T>::InsufficientSurplus);

			T::Assets::transfer(
				loan.collateral_asset,
				&Self::loan_account_id(loan_id),
				&who,
				amount,
				Preservation::Expendable,
			)?;

			Self::deposit_event(Event::CollateralWithdrawn { loan_id, amount });
			Ok(())
		}

		/// Pay down a loan with collateral surplus instead of liability units.
		///
		/// ## Dispatch Origin
		///
		/// Must be `Signed` by the loan's borrower.
		///
		/// ## Details
		///
		/// Transfers `amount` of surplus collateral from the loan account to the treasury and
		/// reduces the debt by the same amount. This is the protocol's no-interest mechanism:
		/// value the collateral produces on its own (e.g. an external rebase crediting the
		/// loan account) retires principal, and the protocol is compensated from that same
		/// surplus rather than from borrower-paid interest. Any collateral above the debt
		/// qualifies, regardless of how it arrived.
		///
		/// ## Errors
		///
		/// - [`Error::UnknownLoan`]: If no loan exists under `loan_id`.
		/// - [`Error::Unauthorized`]: If the caller is not the borrower.
		/// - [`Error::ZeroAmount`]: If `amount` is zero.
		/// - [`Error::InsufficientSurplus`]: If `amount` exceeds the surplus.
		/// - [`ArithmeticError::Underflow`]: If `amount` exceeds the outstanding debt.
		///
		/// ## Events
		///
		/// - [`Event::YieldApplied`]: Emitted with the amount forwarded to the treasury.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::apply_yield())]
		pub fn apply_yield(
			origin: OriginFor<T>,
			#[pallet::compact] loan_id: LoanId,
			amount: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;

			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			Loans::<T>::try_mutate(loan_id, |maybe_loan| -> DispatchResult {
				let loan = maybe_loan.as_mut().ok_or(Error::<T>::UnknownLoan)?;
				ensure!(loan.borrower == who, Error::<T>::Unauthorized);
				ensure!(amount <= loan.surplus(loan_id), Error::<T>::InsufficientSurplus);

				loan.debt =
					loan.debt.checked_sub(&amount).ok_or(ArithmeticError::Underflow)?;

				T::Assets::transfer(
					loan.collateral_asset,
					&Self::loan_account_id(loan_id),
					&T::Treasury::get(),
					amount,
					Preservation::Expendable,
				)?;

				Self::deposit_event(Event::YieldApplied { loan_id, amount });
				Ok(())
			})
		}

		/// Update a collateral asset's whitelist membership.
		///
		/// ## Dispatch Origin
		///
		/// Must be [`Config::ManagerOrigin`].
		///
		/// ## Details
		///
		/// Toggles whether `asset` may back *new* loans. Existing loans keep the whitelist
		/// snapshot from their creation and are unaffected by revocation.
		///
		/// ## Events
		///
		/// - [`Event::CollateralUpdated`]: Emitted with the new membership value.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::set_allowed_collateral())]
		pub fn set_allowed_collateral(
			origin: OriginFor<T>,
			asset: T::AssetId,
			allowed: bool,
		) -> DispatchResult {
			T::ManagerOrigin::ensure_origin(origin)?;

			if allowed {
				AllowedCollateral::<T>::insert(asset, ());
			} else {
				AllowedCollateral::<T>::remove(asset);
			}

			Self::deposit_event(Event::CollateralUpdated { asset, allowed });
			Ok(())
		}

		/// Update a loan template's whitelist membership.
		///
		/// ## Dispatch Origin
		///
		/// Must be [`Config::ManagerOrigin`].
		///
		/// ## Details
		///
		/// Toggles whether `template` may be used for *new* loans. Whitelisting a fresh
		/// template identity is how new loan behavior variants are introduced without touching
		/// loans created under older ones.
		///
		/// ## Events
		///
		/// - [`Event::LoanTemplateUpdated`]: Emitted with the new membership value.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::set_allowed_loan_template())]
		pub fn set_allowed_loan_template(
			origin: OriginFor<T>,
			template: T::TemplateId,
			allowed: bool,
		) -> DispatchResult {
			T::ManagerOrigin::ensure_origin(origin)?;

			if allowed {
				AllowedLoanTemplates::<T>::insert(template, ());
			} else {
				AllowedLoanTemplates::<T>::remove(template);
			}

			Self::deposit_event(Event::LoanTemplateUpdated { template, allowed });
			Ok(())
		}
	}

	// Helper functions
	impl<T: Config> Pallet<T> {
		/// The pallet's own account.
		///
		/// Borrowers approve collateral and liability pulls against this account.
		pub fn account_id() -> T::AccountId {
			T::PalletId::get().into_account_truncating()
		}

		/// The account custodying a loan's collateral.
		pub fn loan_account_id(id: LoanId) -> T::AccountId {
			// only use two byte prefix to support 16 byte account id (used by test)
			T::PalletId::get().into_sub_account_truncating(("ln", id))
		}

		/// The asset id of the liability unit.
		pub fn liability_asset() -> T::AssetId {
			T::LiabilityAssetId::get()
		}

		/// Whether `asset` may back new loans.
		pub fn collateral_allowed(asset: T::AssetId) -> bool {
			AllowedCollateral::<T>::contains_key(asset)
		}

		/// Whether `template` may be used for new loans.
		pub fn template_allowed(template: T::TemplateId) -> bool {
			AllowedLoanTemplates::<T>::contains_key(template)
		}

		/// The full record of a loan, if it exists.
		pub fn loan(id: LoanId) -> Option<Loan<T>> {
			Loans::<T>::get(id)
		}

		/// A loan's outstanding debt, if the loan exists.
		pub fn debt_balance(id: LoanId) -> Option<BalanceOf<T>> {
			Loans::<T>::get(id).map(|loan| loan.debt)
		}

		/// A loan's collateral balance as reported by the asset ledger.
		///
		/// Zero for unknown loans, which hold nothing by construction.
		pub fn collateral_balance(id: LoanId) -> BalanceOf<T> {
			Loans::<T>::get(id).map(|loan| loan.collateral(id)).unwrap_or_default()
		}
	}
}
